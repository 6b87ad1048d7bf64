//! # Operator-Facing Error Type
//!
//! Unified error type for the console menu loop.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Ordesk                                 │
//! │                                                                         │
//! │  Menu action (e.g. add_customer)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Result<(), AppError>                                            │  │
//! │  │         │                                                        │  │
//! │  │  ValidationError ──► AppError::ConstraintViolation / InvalidInput│  │
//! │  │  DbError::UniqueViolation ──► AppError::ConstraintViolation      │  │
//! │  │  DbError::NotFound ─────────► AppError::NotFound                 │  │
//! │  │  bad selection / amount ────► AppError::InvalidInput             │  │
//! │  │  everything else ───────────► AppError::Storage                  │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Menu loop prints "Error: ..." and redisplays the menu.                │
//! │  Only AppError::Storage during startup terminates the process.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use ordesk_core::money::ParseMoneyError;
use ordesk_core::{CoreError, ValidationError};
use ordesk_db::DbError;

/// Errors surfaced to the operator at the menu boundary.
///
/// Three recoverable kinds plus unrecoverable storage failure. The menu
/// loop prints the message and continues for the first three.
#[derive(Debug, Error)]
pub enum AppError {
    /// A uniqueness or required-field rule was violated.
    #[error("{0}")]
    ConstraintViolation(String),

    /// An id referenced something that does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The operator typed something unparseable (menu choice, amount, date).
    #[error("{0}")]
    InvalidInput(String),

    /// The storage engine failed in a way the operator cannot fix here.
    #[error("Storage failure: {0}")]
    Storage(String),
}

impl AppError {
    /// Creates an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        AppError::InvalidInput(message.into())
    }
}

/// Converts database errors to operator-facing errors.
impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity, id))
            }
            DbError::UniqueViolation { field } => {
                if field.contains("email") {
                    AppError::ConstraintViolation(
                        "That email is already registered to another customer".to_string(),
                    )
                } else {
                    AppError::ConstraintViolation(format!("Duplicate value for {}", field))
                }
            }
            DbError::ForeignKeyViolation { .. } => {
                AppError::ConstraintViolation("Invalid reference".to_string())
            }
            other => {
                // Full detail goes to the log; the operator gets the summary
                tracing::error!(error = %other, "Database operation failed");
                AppError::Storage(other.to_string())
            }
        }
    }
}

/// Converts domain errors to operator-facing errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CustomerNotFound(id) => {
                AppError::NotFound(format!("Customer with id {} not found", id))
            }
            CoreError::OrderNotFound(id) => {
                AppError::NotFound(format!("Order with id {} not found", id))
            }
            CoreError::DuplicateEmail(email) => {
                AppError::ConstraintViolation(format!("Email '{}' is already registered", email))
            }
            CoreError::Validation(e) => e.into(),
        }
    }
}

/// Validation failures are constraint violations for missing fields and
/// invalid input for malformed ones, matching what the operator did wrong.
impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Required { .. } => AppError::ConstraintViolation(err.to_string()),
            ValidationError::InvalidFormat { .. } => AppError::InvalidInput(err.to_string()),
        }
    }
}

impl From<ParseMoneyError> for AppError {
    fn from(err: ParseMoneyError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(format!("terminal I/O failed: {}", err))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_mapping() {
        let err: AppError = DbError::not_found("Customer", 42).into();
        assert!(matches!(err, AppError::NotFound(ref m) if m.contains("42")));
    }

    #[test]
    fn test_duplicate_email_mapping() {
        let err: AppError = DbError::UniqueViolation {
            field: "customers.email".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::ConstraintViolation(ref m) if m.contains("email")));
    }

    #[test]
    fn test_validation_mapping() {
        let err: AppError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::ConstraintViolation(_)));

        let err: AppError = ValidationError::InvalidFormat {
            field: "date".to_string(),
            reason: "expected YYYY-MM-DD".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }
}
