//! Error types for rule declarations.
//!
//! These errors describe defects in the rules themselves (an unknown type name,
//! a regular expression that does not compile). They are never produced for bad
//! input data; data problems are reported as [`FieldError`](crate::FieldError)s.

use thiserror::Error;

/// Result type for rule construction.
pub type Result<T> = std::result::Result<T, RuleError>;

/// Error raised while turning a rule declaration into a [`Rule`](crate::Rule).
#[derive(Error, Debug)]
pub enum RuleError {
    /// The declared type has no checker
    #[error("Unsupported rule type '{type_name}'")]
    UnsupportedType {
        /// The type name as written in the declaration
        type_name: String,
    },

    /// The pattern is not a valid regular expression
    #[error("Invalid regex pattern '{pattern}': {source}")]
    InvalidPattern {
        /// Pattern source text
        pattern: String,
        /// Underlying regex compilation error
        #[source]
        source: regex::Error,
    },

    /// Error attributed to a named field of a rule set
    #[error("Invalid rule for field '{field}': {source}")]
    Field {
        /// Field name
        field: String,
        /// The error raised for that field's rule
        #[source]
        source: Box<RuleError>,
    },
}

impl RuleError {
    /// Creates a new unsupported type error.
    pub fn unsupported_type(type_name: impl Into<String>) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
        }
    }

    /// Creates a new invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Wraps this error with the name of the field it belongs to.
    pub fn in_field(self, field: impl Into<String>) -> Self {
        Self::Field {
            field: field.into(),
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping field attribution.
    pub fn root(&self) -> &RuleError {
        match self {
            Self::Field { source, .. } => source.root(),
            other => other,
        }
    }

    /// Returns the field this error is attributed to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Field { field, .. } => Some(field),
            _ => None,
        }
    }
}
