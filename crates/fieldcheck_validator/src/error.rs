//! Error types for validation operations.
//!
//! Every variant here is fatal: it means the call itself was malformed (bad
//! rules, missing translation), and the validation is aborted. Invalid field
//! values are never errors; they are reported as
//! [`FieldError`](fieldcheck_core::FieldError)s.

use fieldcheck_core::RuleError;
use thiserror::Error;

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, ValidatorError>;

/// Errors that abort a validation call.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// The rules argument is not an object (localized message)
    #[error("{0}")]
    RulesNotObject(String),

    /// The input argument is not an object (localized message)
    #[error("{0}")]
    InputNotObject(String),

    /// A rule declares a type that has no checker (localized message)
    #[error("{message}")]
    UnsupportedType { type_name: String, message: String },

    /// No template for the key in the active locale, and no override
    #[error("Can not find translation '{key}' for locale '{locale}'")]
    MissingTranslation { key: String, locale: String },

    /// A rule could not be built (e.g. invalid regex)
    #[error("Invalid rule: {0}")]
    Rule(#[from] RuleError),

    /// The rules object does not have the expected shape
    #[error("Malformed rules: {0}")]
    InvalidRules(#[source] serde_json::Error),

    /// The messages object does not have the expected shape
    #[error("Malformed messages: {0}")]
    InvalidMessages(#[source] serde_json::Error),
}

impl ValidatorError {
    /// Creates a new missing translation error.
    pub fn missing_translation(key: impl Into<String>, locale: impl Into<String>) -> Self {
        Self::MissingTranslation {
            key: key.into(),
            locale: locale.into(),
        }
    }

    /// Creates a new unsupported type error.
    pub fn unsupported_type(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
            message: message.into(),
        }
    }
}
