//! Main validation engine.
//!
//! This module provides the [`Validator`] that ties the pieces together:
//! optional coercion, per-field dispatch to the type checkers, and message
//! resolution.

use crate::checkers::check;
use crate::coerce::coerce;
use crate::resolver::{FieldContext, MessageResolver, substitute};
use crate::translations::{INPUT_OBJECT, RULES_OBJECT, TYPE_NOT_SUPPORTED};
use crate::value::{Record, Value};
use crate::{Result, Translations, ValidatorError};
use fieldcheck_core::{
    FieldError, MessageOverrides, RawRuleSet, RuleError, RuleSet, ValidationOutcome,
    ValidatorConfig,
};
use serde::Deserialize;
use tracing::{debug, trace};

/// Validation engine.
///
/// Configuration is fixed at construction. Every call to
/// [`validate`](Validator::validate) keeps its working state on the stack, so a
/// single validator can be shared freely, including across threads.
///
/// # Example
///
/// ```rust
/// use fieldcheck_core::{RuleBuilder, RuleSetBuilder};
/// use fieldcheck_validator::{Record, Validator, Value};
///
/// let rules = RuleSetBuilder::new()
///     .field("value", RuleBuilder::integer().build())
///     .build();
///
/// let mut input = Record::new();
/// input.insert("value".to_string(), Value::from("123"));
///
/// let validator = Validator::new();
/// let outcome = validator.validate(&mut input, &rules, None).unwrap();
///
/// assert!(outcome.is_none());
/// assert_eq!(input["value"], Value::Int(123));
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    config: ValidatorConfig,
    resolver: MessageResolver,
}

impl Validator {
    /// Creates a validator with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    /// Creates a validator from a configuration.
    ///
    /// An unknown language falls back to the default locale.
    pub fn with_config(config: ValidatorConfig) -> Self {
        let translations = Translations::for_language(&config.language);
        Self::with_translations(config, translations)
    }

    /// Creates a validator that resolves messages from the given translations
    /// instead of the built-in table for `config.language`.
    pub fn with_translations(config: ValidatorConfig, translations: Translations) -> Self {
        Self {
            config,
            resolver: MessageResolver::new(translations),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Returns the locale messages are produced in.
    pub fn locale(&self) -> &'static str {
        self.resolver.translations().locale()
    }

    /// Validates `input` against `rules`.
    ///
    /// With `convert` enabled, `input` is coerced in place first. Fields are then
    /// checked in rule order and at most one error is reported per field.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when every field passed, `Ok(Some(errors))` otherwise. `Err`
    /// is reserved for defects in the call itself, such as a missing
    /// translation.
    pub fn validate(
        &self,
        input: &mut Record,
        rules: &RuleSet,
        messages: Option<&MessageOverrides>,
    ) -> Result<ValidationOutcome> {
        debug!(
            "Validating {} field(s) (locale: {}, convert: {})",
            rules.len(),
            self.locale(),
            self.config.convert
        );

        if self.config.convert {
            coerce(input, rules);
        }

        let mut errors = Vec::new();
        for (field, rule) in rules.iter() {
            let Some(key) = check(rule, input.get(field)) else {
                continue;
            };

            let ctx = FieldContext {
                field,
                rule,
                overrides: messages,
            };
            let message = self.resolver.resolve(key, &ctx)?;
            trace!("Field '{}' failed {}", field, key);
            errors.push(FieldError::new(field, message));
        }

        debug!("Validation finished with {} error(s)", errors.len());
        Ok(if errors.is_empty() { None } else { Some(errors) })
    }

    /// Validates untyped JSON.
    ///
    /// `rules` must be an object of rule declarations and `input` an object of
    /// values; `messages`, when present and not null, must be an object of
    /// overrides. Values changed by coercion are written back into `input`.
    ///
    /// # Errors
    ///
    /// - [`ValidatorError::RulesNotObject`] / [`ValidatorError::InputNotObject`]
    /// - [`ValidatorError::UnsupportedType`] if a rule names an unknown type; this
    ///   is detected before coercion, so `input` is left untouched
    /// - [`ValidatorError::InvalidRules`], [`ValidatorError::Rule`] or
    ///   [`ValidatorError::InvalidMessages`] for malformed declarations
    pub fn validate_json(
        &self,
        input: &mut serde_json::Value,
        rules: &serde_json::Value,
        messages: Option<&serde_json::Value>,
    ) -> Result<ValidationOutcome> {
        if !rules.is_object() {
            return Err(ValidatorError::RulesNotObject(self.text(RULES_OBJECT, None)?));
        }
        let Some(object) = input.as_object_mut() else {
            return Err(ValidatorError::InputNotObject(self.text(INPUT_OBJECT, None)?));
        };

        let rules = self.parse_rules(rules)?;
        let messages = match messages {
            None | Some(serde_json::Value::Null) => None,
            Some(value) => Some(
                MessageOverrides::deserialize(value).map_err(ValidatorError::InvalidMessages)?,
            ),
        };

        let mut record: Record = rules
            .fields()
            .filter_map(|field| {
                object
                    .get(field)
                    .map(|value| (field.to_string(), Value::from(value.clone())))
            })
            .collect();

        let original = self.config.convert.then(|| record.clone());
        let outcome = self.validate(&mut record, &rules, messages.as_ref())?;

        // Only converted values are written back; the rest keep their JSON form.
        if let Some(original) = original {
            for (field, value) in record {
                if original.get(&field) != Some(&value) {
                    object.insert(field, value.into());
                }
            }
        }

        Ok(outcome)
    }

    fn parse_rules(&self, rules: &serde_json::Value) -> Result<RuleSet> {
        let raw = RawRuleSet::deserialize(rules).map_err(ValidatorError::InvalidRules)?;

        RuleSet::try_from(raw).map_err(|err| {
            if let RuleError::UnsupportedType { type_name } = err.root() {
                return match self.text(TYPE_NOT_SUPPORTED, Some(type_name)) {
                    Ok(message) => ValidatorError::unsupported_type(type_name, message),
                    Err(missing) => missing,
                };
            }
            ValidatorError::Rule(err)
        })
    }

    /// Renders an engine-level template, substituting `:type` when given.
    fn text(&self, key: &str, type_name: Option<&str>) -> Result<String> {
        let template = self.resolver.translations().template(key)?;
        Ok(substitute(template, |token| match token {
            ":type" => type_name.map(str::to_string),
            _ => None,
        }))
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
