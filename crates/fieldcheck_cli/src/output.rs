use anyhow::Result;
use colored::*;
use fieldcheck_core::FieldError;
use serde_json::{Map, Value, json};

/// Everything printed after a `validate` run.
pub struct Report<'a> {
    pub fields_checked: usize,
    pub errors: &'a [FieldError],
    /// Input after coercion, when requested
    pub input: Option<&'a Map<String, Value>>,
}

impl Report<'_> {
    fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn print_validation_report(report: &Report<'_>, format: &str) -> Result<()> {
    match format {
        "json" => print_json_report(report),
        _ => print_text_report(report),
    }
}

fn print_text_report(report: &Report<'_>) -> Result<()> {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    if report.passed() {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );
    }

    if !report.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for (i, error) in report.errors.iter().enumerate() {
            println!("  {}. {}", i + 1, error.to_string().red());
        }
    }

    if let Some(input) = report.input {
        println!("\n{}", "Input:".bold());
        println!("{}", serde_json::to_string_pretty(input)?);
    }

    println!("\n{}", "Summary:".bold());
    println!("  Fields checked: {}", report.fields_checked);
    println!("  Total errors:   {}", report.errors.len());
    println!("{}", "═".repeat(60));

    Ok(())
}

fn print_json_report(report: &Report<'_>) -> Result<()> {
    let mut output = json!({
        "passed": report.passed(),
        "errors": report.errors,
        "summary": {
            "field_count": report.fields_checked,
            "error_count": report.errors.len(),
        }
    });
    if let Some(input) = report.input {
        output["input"] = Value::Object(input.clone());
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
