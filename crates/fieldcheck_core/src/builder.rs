//! Builder pattern for creating rules and rule sets.
//!
//! This module provides ergonomic builders for constructing rules with a
//! fluent API.

use crate::{FieldType, Pattern, Rule, RuleSet, TypeRule};

/// Builder for creating a `Rule`.
///
/// Constraints that do not apply to the chosen type are dropped by
/// [`build`](RuleBuilder::build): a boolean rule has no bounds, and only string
/// rules keep a pattern.
///
/// # Example
///
/// ```rust
/// use fieldcheck_core::{Pattern, RuleBuilder};
///
/// let rule = RuleBuilder::string()
///     .min(2)
///     .max(10)
///     .pattern(Pattern::new(r"^[a-z ]+$").unwrap())
///     .build();
///
/// assert!(rule.required);
/// assert_eq!(rule.max(), Some(10.0));
/// ```
#[derive(Debug, Clone)]
pub struct RuleBuilder {
    field_type: FieldType,
    required: bool,
    min: Option<f64>,
    max: Option<f64>,
    pattern: Option<Pattern>,
}

impl RuleBuilder {
    /// Creates a new rule builder for the given type.
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: true,
            min: None,
            max: None,
            pattern: None,
        }
    }

    /// Starts an integer rule.
    pub fn integer() -> Self {
        Self::new(FieldType::Integer)
    }

    /// Starts a number rule.
    pub fn number() -> Self {
        Self::new(FieldType::Number)
    }

    /// Starts a string rule.
    pub fn string() -> Self {
        Self::new(FieldType::String)
    }

    /// Starts a boolean rule.
    pub fn boolean() -> Self {
        Self::new(FieldType::Boolean)
    }

    /// Sets whether the field is required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Marks the field as optional.
    pub fn optional(self) -> Self {
        self.required(false)
    }

    /// Sets the inclusive lower bound (value, or length for strings).
    pub fn min(mut self, min: impl Into<f64>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Sets the inclusive upper bound (value, or length for strings).
    pub fn max(mut self, max: impl Into<f64>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// Sets the pattern a string value must match.
    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Builds the rule.
    pub fn build(self) -> Rule {
        let kind = match self.field_type {
            FieldType::Integer => TypeRule::Integer {
                min: self.min,
                max: self.max,
            },
            FieldType::Number => TypeRule::Number {
                min: self.min,
                max: self.max,
            },
            FieldType::String => TypeRule::String {
                min: self.min,
                max: self.max,
                pattern: self.pattern,
            },
            FieldType::Boolean => TypeRule::Boolean,
        };

        Rule {
            required: self.required,
            kind,
        }
    }
}

/// Builder for creating a `RuleSet`.
///
/// # Example
///
/// ```rust
/// use fieldcheck_core::{RuleBuilder, RuleSetBuilder};
///
/// let rules = RuleSetBuilder::new()
///     .field("active", RuleBuilder::boolean().build())
///     .build();
///
/// assert_eq!(rules.fields().collect::<Vec<_>>(), vec!["active"]);
/// ```
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    rules: RuleSet,
}

impl RuleSetBuilder {
    /// Creates a new rule set builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field rule. Fields are validated in the order they are added.
    pub fn field(mut self, name: impl Into<String>, rule: Rule) -> Self {
        self.rules.insert(name, rule);
        self
    }

    /// Builds the rule set.
    pub fn build(self) -> RuleSet {
        self.rules
    }
}
