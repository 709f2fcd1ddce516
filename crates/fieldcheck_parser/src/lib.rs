//! Parser for fieldcheck rule documents and input records.
//!
//! A rule document holds a `rules` map and an optional `messages` map of
//! per-field overrides. It can be written in YAML, TOML or JSON; field order in
//! the file is the order in which fields are checked.
//!
//! # Example
//!
//! ```rust
//! use fieldcheck_parser::parse_yaml;
//!
//! let yaml = r#"
//! rules:
//!   name: { type: string, min: 2, max: 10 }
//!   age: { type: integer, min: 22, required: false }
//! messages:
//!   name:
//!     max: "name's length must be less than :max"
//! "#;
//!
//! let document = parse_yaml(yaml).expect("Failed to parse rule document");
//! assert_eq!(document.rules.fields().collect::<Vec<_>>(), vec!["name", "age"]);
//! assert!(document.messages.is_some());
//! ```

use fieldcheck_core::{MessageOverrides, RuleSet};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading rule documents or input records.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// JSON parsing or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,

    /// Input document is not a key-value object
    #[error("Input must be an object, found {0}")]
    InputNotObject(&'static str),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
    /// JSON format (.json)
    Json,
}

/// A rule set together with its optional message overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDocument {
    /// Field rules, in declaration order
    pub rules: RuleSet,

    /// Per-field message overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<MessageOverrides>,
}

/// Parse a rule document from a YAML string.
pub fn parse_yaml(content: &str) -> Result<RuleDocument> {
    let document: RuleDocument = serde_yaml_ng::from_str(content)?;
    Ok(document)
}

/// Parse a rule document from a TOML string.
///
/// # Example
///
/// ```rust
/// use fieldcheck_parser::parse_toml;
///
/// let toml = r#"
/// [rules.value]
/// type = "string"
/// pattern = '\d+'
/// "#;
///
/// let document = parse_toml(toml).unwrap();
/// assert_eq!(document.rules.len(), 1);
/// ```
pub fn parse_toml(content: &str) -> Result<RuleDocument> {
    let document: RuleDocument =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    Ok(document)
}

/// Parse a rule document from a JSON string.
pub fn parse_json(content: &str) -> Result<RuleDocument> {
    let document: RuleDocument = serde_json::from_str(content)?;
    Ok(document)
}

/// Parse a rule document in the given format.
pub fn parse_str(content: &str, format: DocumentFormat) -> Result<RuleDocument> {
    match format {
        DocumentFormat::Yaml => parse_yaml(content),
        DocumentFormat::Toml => parse_toml(content),
        DocumentFormat::Json => parse_json(content),
    }
}

/// Detect the document format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `DocumentFormat::Yaml`
/// * `.toml` → `DocumentFormat::Toml`
/// * `.json` → `DocumentFormat::Json`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<DocumentFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(DocumentFormat::Yaml),
        "toml" => Ok(DocumentFormat::Toml),
        "json" => Ok(DocumentFormat::Json),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a rule document from a file with automatic format detection.
///
/// # Example
///
/// ```no_run
/// use fieldcheck_parser::parse_file;
/// use std::path::Path;
///
/// let document = parse_file(Path::new("rules/signup.yml")).unwrap();
/// println!("Loaded {} rule(s)", document.rules.len());
/// ```
pub fn parse_file(path: &Path) -> Result<RuleDocument> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    parse_str(&content, format)
}

/// Parse an input record in the given format.
///
/// Any document is accepted as long as its top level is a key-value object.
/// TOML documents always are; YAML and JSON may fail with
/// `ParserError::InputNotObject`.
pub fn parse_input_str(
    content: &str,
    format: DocumentFormat,
) -> Result<serde_json::Map<String, serde_json::Value>> {
    let value: serde_json::Value = match format {
        DocumentFormat::Yaml => serde_yaml_ng::from_str(content)?,
        DocumentFormat::Toml => {
            toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?
        }
        DocumentFormat::Json => serde_json::from_str(content)?,
    };

    match value {
        serde_json::Value::Object(object) => Ok(object),
        other => Err(ParserError::InputNotObject(json_kind(&other))),
    }
}

/// Parse an input record from a file with automatic format detection.
pub fn parse_input_file(path: &Path) -> Result<serde_json::Map<String, serde_json::Value>> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    parse_input_str(&content, format)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldcheck_core::{Constraint, FieldType, RuleBuilder, RuleSetBuilder};
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_parse_valid_yaml_minimal() {
        let yaml = r#"
rules:
  value:
    type: integer
"#;

        let document = parse_yaml(yaml).expect("Failed to parse valid YAML");

        let rule = document.rules.get("value").expect("Rule should be present");
        assert_eq!(rule.field_type(), FieldType::Integer);
        assert!(rule.required);
        assert!(document.messages.is_none());
    }

    #[test]
    fn test_parse_yaml_with_messages() {
        let yaml = r#"
rules:
  name: { type: string, min: 2, max: 10 }
  age: { type: integer, min: 22, max: 100, required: false }
messages:
  name:
    type: "sailor's name should be a string"
    max: "name's length must be less than :max"
  age:
    min: "水手的年龄必须大于:min"
"#;

        let document = parse_yaml(yaml).expect("Failed to parse YAML with messages");

        let expected = RuleSetBuilder::new()
            .field("name", RuleBuilder::string().min(2).max(10).build())
            .field(
                "age",
                RuleBuilder::integer().min(22).max(100).optional().build(),
            )
            .build();
        assert_eq!(document.rules, expected);

        let messages = document.messages.expect("Messages should be present");
        assert_eq!(
            messages.get("name", Constraint::Max),
            Some("name's length must be less than :max")
        );
        assert_eq!(
            messages.get("age", Constraint::Min),
            Some("水手的年龄必须大于:min")
        );
        assert_eq!(messages.get("age", Constraint::Max), None);
    }

    #[test]
    fn test_parse_yaml_keeps_declaration_order() {
        let yaml = r#"
rules:
  zeta: { type: boolean }
  alpha: { type: number }
  mid: { type: string }
"#;

        let document = parse_yaml(yaml).unwrap();

        assert_eq!(
            document.rules.fields().collect::<Vec<_>>(),
            vec!["zeta", "alpha", "mid"]
        );
    }

    #[test]
    fn test_parse_yaml_unsupported_type() {
        let yaml = r#"
rules:
  when:
    type: date
"#;

        let err = parse_yaml(yaml).unwrap_err();
        assert!(matches!(err, ParserError::YamlError(_)));
        assert!(err.to_string().contains("date"), "got: {err}");
    }

    #[test]
    fn test_parse_yaml_invalid_pattern() {
        let yaml = r#"
rules:
  code: { type: string, pattern: "(unclosed" }
"#;

        assert!(matches!(
            parse_yaml(yaml).unwrap_err(),
            ParserError::YamlError(_)
        ));
    }

    #[test]
    fn test_parse_yaml_missing_rules() {
        let yaml = r#"
messages:
  value: { required: "needed" }
"#;

        assert!(parse_yaml(yaml).is_err());
    }

    #[test]
    fn test_parse_valid_toml() {
        let toml = r#"
[rules.name]
type = "string"
max = 10

[rules.active]
type = "boolean"
required = false

[messages.name]
max = "too long"
"#;

        let document = parse_toml(toml).expect("Failed to parse valid TOML");

        assert_eq!(
            document.rules.fields().collect::<Vec<_>>(),
            vec!["name", "active"]
        );
        assert_eq!(document.rules.get("name").unwrap().max(), Some(10.0));
        assert!(!document.rules.get("active").unwrap().required);
        assert_eq!(
            document.messages.unwrap().get("name", Constraint::Max),
            Some("too long")
        );
    }

    #[test]
    fn test_parse_invalid_toml() {
        let invalid_toml = r#"
[rules.name
type = "string"
"#;

        let result = parse_toml(invalid_toml);
        assert!(matches!(result.unwrap_err(), ParserError::TomlError(_)));
    }

    #[test]
    fn test_parse_valid_json() {
        let json = r#"{
            "rules": { "value": { "type": "string", "pattern": "/\\d+/" } }
        }"#;

        let document = parse_json(json).expect("Failed to parse valid JSON");

        let pattern = document.rules.get("value").unwrap().pattern().unwrap();
        assert_eq!(pattern.as_str(), r"\d+");
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(
            detect_format(Path::new("rules.yaml")).unwrap(),
            DocumentFormat::Yaml
        );
        assert_eq!(
            detect_format(Path::new("rules.YML")).unwrap(),
            DocumentFormat::Yaml
        );
        assert_eq!(
            detect_format(Path::new("rules.toml")).unwrap(),
            DocumentFormat::Toml
        );
        assert_eq!(
            detect_format(Path::new("rules.json")).unwrap(),
            DocumentFormat::Json
        );
    }

    #[test]
    fn test_detect_format_unsupported() {
        let result = detect_format(Path::new("rules.xml"));
        assert!(matches!(
            result.unwrap_err(),
            ParserError::UnsupportedFormat(_)
        ));
    }

    #[test]
    fn test_detect_format_no_extension() {
        let result = detect_format(Path::new("rules"));
        assert!(matches!(result.unwrap_err(), ParserError::InvalidExtension));
    }

    #[test]
    fn test_parse_input_formats() {
        let yaml = parse_input_str("name: sailor\nage: 17\n", DocumentFormat::Yaml).unwrap();
        let toml = parse_input_str("name = \"sailor\"\nage = 17\n", DocumentFormat::Toml).unwrap();
        let json = parse_input_str(r#"{"name": "sailor", "age": 17}"#, DocumentFormat::Json).unwrap();

        assert_eq!(yaml, json);
        assert_eq!(toml, json);
        assert_eq!(json["age"], serde_json::json!(17));
    }

    #[test]
    fn test_parse_input_not_object() {
        let err = parse_input_str("[1, 2]", DocumentFormat::Json).unwrap_err();
        assert!(matches!(err, ParserError::InputNotObject("array")));

        let err = parse_input_str("just text", DocumentFormat::Yaml).unwrap_err();
        assert!(matches!(err, ParserError::InputNotObject("string")));
    }

    #[test]
    fn test_parse_file_round_trip() {
        let original = RuleDocument {
            rules: RuleSetBuilder::new()
                .field("count", RuleBuilder::integer().min(1).build())
                .build(),
            messages: None,
        };

        let mut file = tempfile::Builder::new()
            .suffix(".yml")
            .tempfile()
            .expect("Failed to create temp file");
        let yaml = serde_yaml_ng::to_string(&original).expect("Failed to serialize");
        file.write_all(yaml.as_bytes()).unwrap();

        let parsed = parse_file(file.path()).expect("Failed to parse");
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file(Path::new("does/not/exist.yml"));
        assert!(matches!(result.unwrap_err(), ParserError::IoError(_)));
    }
}
