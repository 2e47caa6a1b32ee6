//! Shared request-validation helpers.
//!
//! Numeric fields arrive from clients as untyped JSON numbers; these helpers
//! reject malformed values up front so no store access happens for bad input.

use crate::errors::{Result, ValidationError};

/// Ensures an amount is a finite, strictly positive number.
pub fn ensure_positive_amount(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidInput(format!("{} must be a finite number", field)).into());
    }
    if value <= 0.0 {
        return Err(ValidationError::InvalidInput(format!("{} must be positive", field)).into());
    }
    Ok(())
}

/// Ensures a required text field is present and non-blank.
pub fn ensure_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field.to_string()).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_finite_amounts() {
        assert!(ensure_positive_amount("amount", f64::NAN).is_err());
        assert!(ensure_positive_amount("amount", f64::INFINITY).is_err());
    }

    #[test]
    fn rejects_zero_and_negative_amounts() {
        assert!(ensure_positive_amount("amount", 0.0).is_err());
        assert!(ensure_positive_amount("amount", -5.0).is_err());
        assert!(ensure_positive_amount("amount", 0.01).is_ok());
    }

    #[test]
    fn rejects_blank_text() {
        assert!(ensure_non_empty("name", "").is_err());
        assert!(ensure_non_empty("name", "   ").is_err());
        assert!(ensure_non_empty("name", "Emergency fund").is_ok());
    }
}
