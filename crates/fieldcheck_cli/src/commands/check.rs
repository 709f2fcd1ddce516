use anyhow::{Context, Result};
use fieldcheck_parser::parse_file;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(rules_path: &str, format: &str) -> Result<()> {
    info!("Checking rule document: {}", rules_path);

    // Parse the rule document
    let path = Path::new(rules_path);
    let document = parse_file(path)
        .with_context(|| format!("Failed to parse rule document: {}", rules_path))?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    output::print_info(&format!(
        "Rule document loaded: {} field(s)",
        document.rules.len()
    ));

    // Parsing succeeded, so every type and pattern is valid
    output::print_success("Rule document is valid");

    println!("\nFields:");
    for (field, rule) in document.rules.iter() {
        let mut details = vec![if rule.required {
            "required".to_string()
        } else {
            "optional".to_string()
        }];
        if let Some(min) = rule.min() {
            details.push(format!("min {}", min));
        }
        if let Some(max) = rule.max() {
            details.push(format!("max {}", max));
        }
        if let Some(pattern) = rule.pattern() {
            details.push(format!("pattern {}", pattern));
        }
        println!(
            "  {:<16} {:<8} {}",
            field,
            rule.field_type().as_str(),
            details.join(", ")
        );
    }

    if let Some(messages) = document.messages.as_ref().filter(|m| !m.is_empty()) {
        let overridden = document
            .rules
            .fields()
            .filter(|field| messages.has_field(field))
            .count();
        println!("\nCustom messages for {} field(s)", overridden);
    }

    Ok(())
}
