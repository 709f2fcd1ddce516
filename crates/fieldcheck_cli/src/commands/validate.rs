use anyhow::{Context, Result};
use fieldcheck_core::ValidatorConfig;
use fieldcheck_parser::{parse_file, parse_input_file};
use fieldcheck_validator::{Validator, record_from_json};
use std::path::Path;
use tracing::info;

use crate::output;

/// Flags of the `validate` command.
pub struct Options {
    pub language: String,
    pub convert: bool,
    pub format: String,
    pub print_input: bool,
}

/// Validates the input file against the rule document.
///
/// Returns whether every field passed.
pub fn execute(rules_path: &str, input_path: &str, options: &Options) -> Result<bool> {
    info!("Validating {} against {}", input_path, rules_path);
    info!("Language: {}", options.language);
    info!("Convert: {}", options.convert);

    let document = parse_file(Path::new(rules_path))
        .with_context(|| format!("Failed to parse rule document: {}", rules_path))?;
    let mut input = parse_input_file(Path::new(input_path))
        .with_context(|| format!("Failed to parse input file: {}", input_path))?;

    let config = ValidatorConfig::new()
        .with_language(options.language.as_str())
        .with_convert(options.convert);
    let validator = Validator::with_config(config);

    let mut record = record_from_json(input.clone());
    let outcome = validator
        .validate(&mut record, &document.rules, document.messages.as_ref())
        .context("Validation aborted")?;

    let coerced = if options.print_input {
        for field in document.rules.fields() {
            if let Some(value) = record.remove(field) {
                input.insert(field.to_string(), value.into());
            }
        }
        Some(&input)
    } else {
        None
    };

    let report = output::Report {
        fields_checked: document.rules.len(),
        errors: outcome.as_deref().unwrap_or_default(),
        input: coerced,
    };
    output::print_validation_report(&report, &options.format)?;

    Ok(outcome.is_none())
}
