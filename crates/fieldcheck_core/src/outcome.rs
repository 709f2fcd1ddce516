//! Validation outcome types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single validation failure: which field failed and the message to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name
    pub field: String,

    /// Localized, interpolated message
    pub message: String,
}

impl FieldError {
    /// Creates a new field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of validating one input.
///
/// `None` means every field passed. `Some` always holds at least one error,
/// ordered like the rule set.
pub type ValidationOutcome = Option<Vec<FieldError>>;
