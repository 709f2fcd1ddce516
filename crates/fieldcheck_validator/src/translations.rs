//! Message templates per locale.
//!
//! Templates are looked up by a dotted key: either `{type}.{constraint}` (see
//! [`TemplateKey`]) or one of the engine-level keys ([`INPUT_OBJECT`],
//! [`RULES_OBJECT`], [`TYPE_NOT_SUPPORTED`]). Templates contain the placeholders
//! `:field`, `:min`, `:max`, `:pattern` and `:type`.
//!
//! Adding a locale means adding a table to [`LOCALES`].

use crate::{Result, ValidatorError};
use fieldcheck_core::{Constraint, DEFAULT_LANGUAGE, FieldType};
use std::fmt;
use tracing::warn;

/// Template for "input is not an object".
pub const INPUT_OBJECT: &str = "input.object";

/// Template for "rules are not an object".
pub const RULES_OBJECT: &str = "rules.object";

/// Template for an unknown rule type; uses `:type`.
pub const TYPE_NOT_SUPPORTED: &str = "type.notSupport";

/// A locale's templates, keyed by template key.
pub type Table = &'static [(&'static str, &'static str)];

const EN_US: Table = &[
    (INPUT_OBJECT, "input must be an object"),
    (RULES_OBJECT, "rules must be an object"),
    (TYPE_NOT_SUPPORTED, ":type is not support"),
    ("integer.required", ":field is required"),
    ("integer.type", ":field must be an integer"),
    ("integer.max", ":field must be less than :max"),
    ("integer.min", ":field must be greater than :min"),
    ("number.required", ":field is required"),
    ("number.type", ":field must be a number"),
    ("number.max", ":field must be less than :max"),
    ("number.min", ":field must be greater than :min"),
    ("string.required", ":field is required"),
    ("string.type", ":field must be a string"),
    ("string.max", ":field length must be less than :max"),
    ("string.min", ":field length must be greater than :min"),
    ("string.pattern", ":field fails to match the :pattern pattern"),
    ("boolean.required", ":field is required"),
    ("boolean.type", ":field must be a boolean"),
];

const ZH_CN: Table = &[
    (INPUT_OBJECT, "验证数据必须是一个对象"),
    (RULES_OBJECT, "验证规则必须是一个对象"),
    (TYPE_NOT_SUPPORTED, ":type不支持"),
    ("integer.required", ":field是必须的"),
    ("integer.type", ":field必须是整数"),
    ("integer.max", ":field必须小于:max"),
    ("integer.min", ":field必须大于:min"),
    ("number.required", ":field是必须的"),
    ("number.type", ":field必须是数字"),
    ("number.max", ":field必须小于:max"),
    ("number.min", ":field必须大于:min"),
    ("string.required", ":field是必须的"),
    ("string.type", ":field必须是字符串"),
    ("string.max", ":field长度必须小于:max"),
    ("string.min", ":field长度必须大于:min"),
    ("string.pattern", ":field必须匹配:pattern"),
    ("boolean.required", ":field是必须的"),
    ("boolean.type", ":field必须是布尔值"),
];

/// Built-in locales. The first entry is the default.
pub const LOCALES: &[(&str, Table)] = &[(DEFAULT_LANGUAGE, EN_US), ("zh_CN", ZH_CN)];

/// Key of a type-specific template, rendered as `{type}.{constraint}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateKey {
    /// Rule type
    pub field_type: FieldType,
    /// Failed constraint
    pub constraint: Constraint,
}

impl TemplateKey {
    /// Creates a template key.
    pub fn new(field_type: FieldType, constraint: Constraint) -> Self {
        Self {
            field_type,
            constraint,
        }
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.field_type, self.constraint)
    }
}

/// The template table of one locale.
#[derive(Debug, Clone, Copy)]
pub struct Translations {
    locale: &'static str,
    table: Table,
}

impl Translations {
    /// Selects the table for `language`, falling back to the default locale
    /// when it is unknown.
    pub fn for_language(language: &str) -> Self {
        match LOCALES.iter().find(|(locale, _)| *locale == language) {
            Some(&(locale, table)) => Self { locale, table },
            None => {
                warn!(
                    "Unknown locale '{}', falling back to {}",
                    language, DEFAULT_LANGUAGE
                );
                Self::default()
            }
        }
    }

    /// Uses a caller-supplied table.
    pub fn custom(locale: &'static str, table: Table) -> Self {
        Self { locale, table }
    }

    /// Returns the built-in locale identifiers.
    pub fn available_locales() -> impl Iterator<Item = &'static str> {
        LOCALES.iter().map(|(locale, _)| *locale)
    }

    /// Returns true if `language` has a built-in table.
    pub fn is_supported(language: &str) -> bool {
        Self::available_locales().any(|locale| locale == language)
    }

    /// Returns the active locale identifier.
    pub fn locale(&self) -> &'static str {
        self.locale
    }

    /// Looks up a template.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.table
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, template)| *template)
    }

    /// Looks up a template, failing if the locale does not define it.
    pub fn template(&self, key: &str) -> Result<&'static str> {
        self.get(key)
            .ok_or_else(|| ValidatorError::missing_translation(key, self.locale))
    }
}

impl Default for Translations {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LANGUAGE,
            table: EN_US,
        }
    }
}
