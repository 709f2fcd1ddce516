//! Rule types and structures.
//!
//! This module contains the typed rule model ([`Rule`], [`TypeRule`], [`RuleSet`])
//! and its serde-facing counterpart ([`RawRule`], [`RawRuleSet`]) used for rule
//! sets loaded from documents, where the type name is free text.

use crate::RuleError;
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// The value types a rule can check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Whole number
    Integer,
    /// Any finite number
    Number,
    /// Text
    String,
    /// `true` or `false`
    Boolean,
}

impl FieldType {
    /// All supported types, in declaration order.
    pub const ALL: [FieldType; 4] = [
        FieldType::Integer,
        FieldType::Number,
        FieldType::String,
        FieldType::Boolean,
    ];

    /// Returns the canonical type name.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Integer => "integer",
            FieldType::Number => "number",
            FieldType::String => "string",
            FieldType::Boolean => "boolean",
        }
    }

    /// Looks up a type by its canonical name. Matching is exact.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A compiled regular expression that remembers its source text.
///
/// The source may be written with slash delimiters (`/\d+/`), optionally
/// followed by the flags `i`, `m` and `s` (`/hello/i`). Delimiters are stripped
/// and flags become inline regex flags. [`Display`](fmt::Display) always renders
/// the delimited form, which is what error messages show for `:pattern`.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    flags: String,
    regex: Regex,
}

/// Flags accepted after the closing delimiter.
const PATTERN_FLAGS: &str = "ims";

impl Pattern {
    /// Compiles a pattern.
    ///
    /// Fails with [`RuleError::InvalidPattern`] if the regex does not compile or
    /// a flag is unsupported or repeated.
    pub fn new(pattern: &str) -> crate::Result<Self> {
        let (source, flags) = split_delimiters(pattern);

        for (i, flag) in flags.char_indices() {
            if !PATTERN_FLAGS.contains(flag) || flags[..i].contains(flag) {
                let reason = format!("unsupported or repeated flag '{}'", flag);
                return Err(RuleError::invalid_pattern(
                    pattern,
                    regex::Error::Syntax(reason),
                ));
            }
        }

        let compiled = if flags.is_empty() {
            Regex::new(source)
        } else {
            Regex::new(&format!("(?{}){}", flags, source))
        };
        let regex = compiled.map_err(|e| RuleError::invalid_pattern(pattern, e))?;

        Ok(Self {
            source: source.to_string(),
            flags: flags.to_string(),
            regex,
        })
    }

    /// Returns the pattern source without delimiters or flags.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the flags written after the closing delimiter.
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Returns the pattern as it would be declared in a rule document.
    pub fn declaration(&self) -> String {
        if self.flags.is_empty() {
            self.source.clone()
        } else {
            self.to_string()
        }
    }

    /// Returns true if the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

/// Splits `/source/flags` into its parts. Text after the last slash only counts
/// as flags when it is made of ASCII letters; otherwise the whole input is the
/// source (`/api/v1` stays as written).
fn split_delimiters(pattern: &str) -> (&str, &str) {
    let Some(body) = pattern.strip_prefix('/') else {
        return (pattern, "");
    };
    match body.rfind('/') {
        Some(end) if body[end + 1..].chars().all(|c| c.is_ascii_alphabetic()) => {
            (&body[..end], &body[end + 1..])
        }
        _ => (pattern, ""),
    }
}

/// Type-specific part of a rule.
///
/// `min` and `max` are inclusive. For numeric types they bound the value, for
/// strings they bound the length in characters.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRule {
    /// Integer rule
    Integer {
        /// Smallest accepted value
        min: Option<f64>,
        /// Largest accepted value
        max: Option<f64>,
    },

    /// Number rule
    Number {
        /// Smallest accepted value
        min: Option<f64>,
        /// Largest accepted value
        max: Option<f64>,
    },

    /// String rule
    String {
        /// Minimum length
        min: Option<f64>,
        /// Maximum length
        max: Option<f64>,
        /// Pattern the value must match
        pattern: Option<Pattern>,
    },

    /// Boolean rule
    Boolean,
}

/// Validation contract for a single field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRule", into = "RawRule")]
pub struct Rule {
    /// Whether a missing or empty value is an error
    pub required: bool,

    /// Type and type-specific constraints
    pub kind: TypeRule,
}

impl Rule {
    /// Creates a required rule of the given kind.
    pub fn new(kind: TypeRule) -> Self {
        Self {
            required: true,
            kind,
        }
    }

    /// Returns the type this rule checks.
    pub fn field_type(&self) -> FieldType {
        match self.kind {
            TypeRule::Integer { .. } => FieldType::Integer,
            TypeRule::Number { .. } => FieldType::Number,
            TypeRule::String { .. } => FieldType::String,
            TypeRule::Boolean => FieldType::Boolean,
        }
    }

    /// Returns the configured lower bound, if any.
    pub fn min(&self) -> Option<f64> {
        match self.kind {
            TypeRule::Integer { min, .. }
            | TypeRule::Number { min, .. }
            | TypeRule::String { min, .. } => min,
            TypeRule::Boolean => None,
        }
    }

    /// Returns the configured upper bound, if any.
    pub fn max(&self) -> Option<f64> {
        match self.kind {
            TypeRule::Integer { max, .. }
            | TypeRule::Number { max, .. }
            | TypeRule::String { max, .. } => max,
            TypeRule::Boolean => None,
        }
    }

    /// Returns the configured pattern, if any.
    pub fn pattern(&self) -> Option<&Pattern> {
        match &self.kind {
            TypeRule::String { pattern, .. } => pattern.as_ref(),
            _ => None,
        }
    }
}

fn default_required() -> bool {
    true
}

/// Untyped rule declaration, as found in rule documents.
///
/// Converting into a [`Rule`] fails for unknown type names and for patterns that
/// do not compile. Constraints that do not apply to the declared type are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRule {
    /// Type name (`integer`, `number`, `string`, `boolean`)
    #[serde(rename = "type")]
    pub field_type: String,

    /// Whether the field is required
    #[serde(default = "default_required")]
    pub required: bool,

    /// Lower bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Upper bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Regular expression (strings only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl TryFrom<RawRule> for Rule {
    type Error = RuleError;

    fn try_from(raw: RawRule) -> Result<Self, Self::Error> {
        let field_type = FieldType::parse(&raw.field_type)
            .ok_or_else(|| RuleError::unsupported_type(&raw.field_type))?;

        let kind = match field_type {
            FieldType::Integer => TypeRule::Integer {
                min: raw.min,
                max: raw.max,
            },
            FieldType::Number => TypeRule::Number {
                min: raw.min,
                max: raw.max,
            },
            FieldType::String => TypeRule::String {
                min: raw.min,
                max: raw.max,
                pattern: raw.pattern.as_deref().map(Pattern::new).transpose()?,
            },
            FieldType::Boolean => TypeRule::Boolean,
        };

        Ok(Rule {
            required: raw.required,
            kind,
        })
    }
}

impl From<Rule> for RawRule {
    fn from(rule: Rule) -> Self {
        RawRule {
            field_type: rule.field_type().as_str().to_string(),
            required: rule.required,
            min: rule.min(),
            max: rule.max(),
            pattern: rule.pattern().map(Pattern::declaration),
        }
    }
}

/// Ordered mapping from field name to [`Rule`].
///
/// Iteration follows insertion order, which is also the order in which fields
/// are validated and errors are reported. Inserting a field that already exists
/// replaces its rule without moving it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "RawRuleSet")]
pub struct RuleSet {
    entries: IndexMap<String, Rule>,
}

impl RuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the rule for `field`.
    pub fn insert(&mut self, field: impl Into<String>, rule: Rule) {
        self.entries.insert(field.into(), rule);
    }

    /// Returns the rule for `field`.
    pub fn get(&self, field: &str) -> Option<&Rule> {
        self.entries.get(field)
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(field, rule)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.entries.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    /// Iterates over field names in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromIterator<(String, Rule)> for RuleSet {
    fn from_iter<T: IntoIterator<Item = (String, Rule)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Serialize for RuleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

/// Ordered mapping from field name to [`RawRule`], in document order.
///
/// A key repeated in the document keeps its first position and its last value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RawRuleSet(IndexMap<String, RawRule>);

impl TryFrom<RawRuleSet> for RuleSet {
    type Error = RuleError;

    fn try_from(raw: RawRuleSet) -> Result<Self, Self::Error> {
        raw.0
            .into_iter()
            .map(|(field, rule)| match Rule::try_from(rule) {
                Ok(rule) => Ok((field, rule)),
                Err(e) => Err(e.in_field(field)),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_type_names() {
        for t in FieldType::ALL {
            assert_eq!(FieldType::parse(t.as_str()), Some(t));
        }
        assert_eq!(FieldType::parse("Integer"), None);
        assert_eq!(FieldType::parse("email"), None);
    }

    #[test]
    fn test_pattern_strips_delimiters() {
        let pattern = Pattern::new(r"/\d+/").unwrap();
        assert_eq!(pattern.as_str(), r"\d+");
        assert_eq!(pattern.to_string(), r"/\d+/");
        assert!(pattern.is_match("abc123"));
        assert!(!pattern.is_match("hello"));

        let bare = Pattern::new(r"\d+").unwrap();
        assert_eq!(bare, pattern);
        assert_eq!(bare.to_string(), r"/\d+/");
    }

    #[test]
    fn test_pattern_flags() {
        let pattern = Pattern::new("/hello/i").unwrap();
        assert_eq!(pattern.as_str(), "hello");
        assert_eq!(pattern.flags(), "i");
        assert_eq!(pattern.to_string(), "/hello/i");
        assert!(pattern.is_match("HELLO"));
        assert!(!pattern.is_match("goodbye"));

        let multiline = Pattern::new("/^b$/m").unwrap();
        assert!(multiline.is_match("a\nb"));
        assert_ne!(multiline, Pattern::new("^b$").unwrap());
    }

    #[test]
    fn test_pattern_rejects_unknown_flags() {
        for source in ["/hello/g", "/hello/ii"] {
            let err = Pattern::new(source).unwrap_err();
            assert!(matches!(err, RuleError::InvalidPattern { .. }), "{source}");
        }
    }

    #[test]
    fn test_pattern_trailing_path_is_literal() {
        let pattern = Pattern::new("/api/v1").unwrap();
        assert_eq!(pattern.as_str(), "/api/v1");
        assert_eq!(pattern.flags(), "");
        assert!(pattern.is_match("GET /api/v1/users"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Pattern::new("[invalid(regex").unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { .. }));
    }

    #[test]
    fn test_raw_rule_defaults() {
        let rule: Rule = serde_json::from_str(r#"{"type": "integer"}"#).unwrap();
        assert!(rule.required);
        assert_eq!(rule.kind, TypeRule::Integer { min: None, max: None });
    }

    #[test]
    fn test_raw_rule_ignores_foreign_constraints() {
        let rule: Rule =
            serde_json::from_str(r#"{"type": "boolean", "min": 1, "pattern": "x"}"#).unwrap();
        assert_eq!(rule.kind, TypeRule::Boolean);
        assert_eq!(rule.min(), None);
        assert!(rule.pattern().is_none());
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result: Result<Rule, _> = serde_json::from_str(r#"{"type": "email"}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Unsupported rule type 'email'"));
    }

    #[test]
    fn test_rule_set_keeps_document_order() {
        let json = r#"{
            "zeta": {"type": "string"},
            "alpha": {"type": "integer", "required": false},
            "mid": {"type": "boolean"}
        }"#;
        let rules: RuleSet = serde_json::from_str(json).unwrap();
        let fields: Vec<&str> = rules.fields().collect();
        assert_eq!(fields, vec!["zeta", "alpha", "mid"]);
        assert!(!rules.get("alpha").unwrap().required);
    }

    #[test]
    fn test_rule_set_error_names_field() {
        let json = r#"{"name": {"type": "string"}, "when": {"type": "date"}}"#;
        let raw: RawRuleSet = serde_json::from_str(json).unwrap();
        let err = RuleSet::try_from(raw).unwrap_err();
        assert_eq!(err.field(), Some("when"));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut rules = RuleSet::new();
        rules.insert("a", Rule::new(TypeRule::Boolean));
        rules.insert("b", Rule::new(TypeRule::Boolean));
        rules.insert(
            "a",
            Rule::new(TypeRule::Number {
                min: Some(1.0),
                max: None,
            }),
        );

        assert_eq!(rules.len(), 2);
        assert_eq!(rules.fields().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(rules.get("a").unwrap().field_type(), FieldType::Number);
    }

    #[test]
    fn test_rule_set_serializes_as_map() {
        let mut rules = RuleSet::new();
        rules.insert(
            "code",
            Rule::new(TypeRule::String {
                min: None,
                max: Some(4.0),
                pattern: Some(Pattern::new(r"^\d+$").unwrap()),
            }),
        );

        let value = serde_json::to_value(&rules).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "code": {"type": "string", "required": true, "max": 4.0, "pattern": r"^\d+$"}
            })
        );

        let back: RuleSet = serde_json::from_value(value).unwrap();
        assert_eq!(back, rules);
    }

    #[test]
    fn test_flagged_pattern_round_trips() {
        let rule: Rule =
            serde_json::from_str(r#"{"type": "string", "pattern": "/abc/is"}"#).unwrap();
        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(value["pattern"], "/abc/is");

        let back: Rule = serde_json::from_value(value).unwrap();
        assert_eq!(back, rule);
    }

    #[test]
    fn test_duplicate_keys_keep_first_position() {
        let json = r#"{
            "a": {"type": "boolean"},
            "b": {"type": "string"},
            "a": {"type": "number"}
        }"#;
        let rules: RuleSet = serde_json::from_str(json).unwrap();

        assert_eq!(rules.fields().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(rules.get("a").unwrap().field_type(), FieldType::Number);
    }
}
