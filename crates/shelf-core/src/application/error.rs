//! Application layer errors.
//!
//! These errors represent failures in orchestration, not lending rules.
//! Rule violations are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The scenario could not be read or parsed.
    #[error("Failed to load scenario from {source_name}: {reason}")]
    ScenarioLoad { source_name: String, reason: String },

    /// Two books or two patrons share a key.
    #[error("Duplicate {kind} key '{key}' in scenario")]
    DuplicateKey { kind: &'static str, key: String },

    /// A step or query names a key the scenario never declared.
    #[error("Unknown {kind} key '{key}'")]
    UnknownKey { kind: &'static str, key: String },

    /// Journal access failed (lock poisoned, etc.).
    #[error("Loan journal unavailable")]
    JournalUnavailable,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ScenarioLoad { source_name, .. } => vec![
                format!("Could not read: {}", source_name),
                "Check that the file exists and is valid TOML".into(),
            ],
            Self::DuplicateKey { kind, key } => vec![
                format!("Give each {} a unique key ('{}' is used twice)", kind, key),
            ],
            Self::UnknownKey { kind, key } => vec![
                format!("Declare a {} with key '{}' or fix the reference", kind, key),
            ],
            Self::JournalUnavailable => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ScenarioLoad { .. } => ErrorCategory::NotFound,
            Self::DuplicateKey { .. } => ErrorCategory::Validation,
            Self::UnknownKey { .. } => ErrorCategory::NotFound,
            Self::JournalUnavailable => ErrorCategory::Internal,
        }
    }
}
