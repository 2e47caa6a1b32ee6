//! Completion provider interface and its backings.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AiError;

const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";

/// The single narrow interface to the generative-text collaborator:
/// one prompt in, one text out.
#[async_trait]
pub trait CompletionProviderTrait: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, AiError>;
}

// ---------------------------------------------------------------------------
// Gemini
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
}

#[derive(Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Deserialize)]
struct GeminiResponsePart {
    #[serde(default)]
    text: String,
}

/// Forwards prompts to the Gemini generateContent API.
///
/// Every call is bounded by the client timeout; a slow or unreachable
/// upstream surfaces as [`AiError::Provider`], never a hang.
#[derive(Debug)]
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: String,
}

impl GeminiProvider {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, AiError> {
        if api_key.trim().is_empty() {
            return Err(AiError::MissingApiKey("gemini".to_string()));
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AiError::Internal(e.to_string()))?;
        Ok(GeminiProvider { client, api_key })
    }
}

#[async_trait]
impl CompletionProviderTrait for GeminiProvider {
    async fn complete(&self, prompt: &str) -> Result<String, AiError> {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(GEMINI_ENDPOINT)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| AiError::provider(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AiError::provider(format!(
                "completion API returned status {}",
                response.status()
            )));
        }

        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|e| AiError::provider(e.to_string()))?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AiError::provider("completion API returned no text"));
        }
        Ok(text)
    }
}

// ---------------------------------------------------------------------------
// Canned
// ---------------------------------------------------------------------------

/// Deterministic scripted replies for deployments without an API key, and for
/// tests. Picks a response by keyword so conversations stay plausible.
#[derive(Default)]
pub struct CannedProvider;

impl CannedProvider {
    pub fn new() -> Self {
        CannedProvider
    }
}

#[async_trait]
impl CompletionProviderTrait for CannedProvider {
    async fn complete(&self, prompt: &str) -> Result<String, AiError> {
        let lowered = prompt.to_lowercase();
        let reply = if lowered.contains("budget") {
            "Review your category budgets and keep recurring costs under 50% of income. \
             Categories past their warning threshold are the first place to trim."
        } else if lowered.contains("goal") || lowered.contains("save") {
            "Automate a fixed contribution to your top-priority goal right after payday; \
             steady small amounts beat sporadic large ones."
        } else if lowered.contains("spend") || lowered.contains("transaction") {
            "Log every expense the day it happens. Weekly reviews of your largest \
             category usually surface one subscription worth cancelling."
        } else if lowered.contains("tip") {
            "Set aside an emergency fund covering three months of essential expenses \
             before directing money to other goals."
        } else {
            "I can help with budgets, savings goals, and spending habits. Ask me about \
             any of them, or request a tip."
        };
        Ok(reply.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn canned_replies_are_deterministic() {
        let provider = CannedProvider::new();
        let a = provider.complete("How is my budget doing?").await.unwrap();
        let b = provider.complete("How is my budget doing?").await.unwrap();
        assert_eq!(a, b);
        assert!(a.to_lowercase().contains("budget"));
    }

    #[tokio::test]
    async fn gemini_requires_an_api_key() {
        let err = GeminiProvider::new("  ".to_string(), Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, AiError::MissingApiKey(_)));
    }
}
