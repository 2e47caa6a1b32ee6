use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::auth::AuthManager;
use crate::config::Config;
use finwise_ai::{
    CannedProvider, ChatService, CompletionProviderTrait, GeminiProvider, TipService,
};
use finwise_core::budgets::{BudgetService, BudgetServiceTrait};
use finwise_core::goals::{GoalService, GoalServiceTrait};
use finwise_core::transactions::{TransactionService, TransactionServiceTrait};
use finwise_storage_sqlite::assistant::AssistantRepository;
use finwise_storage_sqlite::budgets::BudgetRepository;
use finwise_storage_sqlite::db::{self, write_actor};
use finwise_storage_sqlite::goals::GoalRepository;
use finwise_storage_sqlite::transactions::TransactionRepository;

pub struct AppState {
    pub goal_service: Arc<dyn GoalServiceTrait + Send + Sync>,
    pub budget_service: Arc<dyn BudgetServiceTrait + Send + Sync>,
    pub transaction_service: Arc<dyn TransactionServiceTrait + Send + Sync>,
    pub chat_service: Arc<ChatService>,
    pub tip_service: Arc<TipService>,
    pub db_path: String,
    pub auth: Option<Arc<AuthManager>>,
}

pub fn init_tracing() {
    let log_format = std::env::var("FINWISE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer(pool.clone());

    let goal_repository = Arc::new(GoalRepository::new(pool.clone(), writer.clone()));
    let goal_service: Arc<dyn GoalServiceTrait + Send + Sync> =
        Arc::new(GoalService::new(goal_repository));

    let budget_repository = Arc::new(BudgetRepository::new(pool.clone(), writer.clone()));
    let budget_service: Arc<dyn BudgetServiceTrait + Send + Sync> =
        Arc::new(BudgetService::new(budget_repository));

    let transaction_repository = Arc::new(TransactionRepository::new(pool.clone(), writer.clone()));
    let transaction_service: Arc<dyn TransactionServiceTrait + Send + Sync> = Arc::new(
        TransactionService::new(transaction_repository, budget_service.clone()),
    );

    // Completion provider: real upstream when a key is configured, scripted
    // replies otherwise. Consumers never know the difference.
    let completion_provider: Arc<dyn CompletionProviderTrait> = match &config.gemini_api_key {
        Some(api_key) => Arc::new(GeminiProvider::new(
            api_key.clone(),
            config.completion_timeout,
        )?),
        None => {
            tracing::info!("No completion API key configured; assistant uses canned responses");
            Arc::new(CannedProvider::new())
        }
    };

    let assistant_repository = Arc::new(AssistantRepository::new(pool.clone(), writer.clone()));
    let chat_service = Arc::new(ChatService::new(
        assistant_repository.clone(),
        completion_provider.clone(),
        budget_service.clone(),
        goal_service.clone(),
    ));
    let tip_service = Arc::new(TipService::new(
        assistant_repository,
        completion_provider,
        budget_service.clone(),
        goal_service.clone(),
    ));

    let auth = config
        .auth
        .as_ref()
        .map(AuthManager::new)
        .transpose()?
        .map(Arc::new);

    Ok(Arc::new(AppState {
        goal_service,
        budget_service,
        transaction_service,
        chat_service,
        tip_service,
        db_path,
        auth,
    }))
}
