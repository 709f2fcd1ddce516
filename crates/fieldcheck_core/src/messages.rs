//! Constraint kinds and per-field message overrides.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The constraint a value failed.
///
/// The lowercase name is both the second half of a template key
/// (`integer.max`) and the key used in [`MessageOverrides`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Constraint {
    /// Value missing or empty
    Required,
    /// Value has the wrong type
    Type,
    /// Value below the lower bound
    Min,
    /// Value above the upper bound
    Max,
    /// Value does not match the pattern
    Pattern,
}

impl Constraint {
    /// Returns the constraint name.
    pub fn as_str(self) -> &'static str {
        match self {
            Constraint::Required => "required",
            Constraint::Type => "type",
            Constraint::Min => "min",
            Constraint::Max => "max",
            Constraint::Pattern => "pattern",
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Custom message templates keyed by field, then by constraint name.
///
/// An override replaces the translated template for that field and constraint.
/// It is still a template: `:field`, `:min`, `:max` and `:pattern` are
/// substituted in it.
///
/// # Example
///
/// ```rust
/// use fieldcheck_core::{Constraint, MessageOverrides};
///
/// let messages = MessageOverrides::new()
///     .with("name", Constraint::Max, "name's length must be less than :max");
///
/// assert_eq!(
///     messages.get("name", Constraint::Max),
///     Some("name's length must be less than :max")
/// );
/// assert_eq!(messages.get("name", Constraint::Min), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageOverrides(HashMap<String, HashMap<String, String>>);

impl MessageOverrides {
    /// Creates an empty set of overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an override, builder style.
    pub fn with(
        mut self,
        field: impl Into<String>,
        constraint: Constraint,
        template: impl Into<String>,
    ) -> Self {
        self.insert(field, constraint, template);
        self
    }

    /// Adds or replaces an override.
    pub fn insert(
        &mut self,
        field: impl Into<String>,
        constraint: Constraint,
        template: impl Into<String>,
    ) {
        self.0
            .entry(field.into())
            .or_default()
            .insert(constraint.as_str().to_string(), template.into());
    }

    /// Returns the override for `field` and `constraint`.
    pub fn get(&self, field: &str, constraint: Constraint) -> Option<&str> {
        self.0
            .get(field)
            .and_then(|by_kind| by_kind.get(constraint.as_str()))
            .map(String::as_str)
    }

    /// Returns true if any override is defined for `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.get(field).is_some_and(|by_kind| !by_kind.is_empty())
    }

    /// Returns true if no overrides are defined.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(HashMap::is_empty)
    }
}
