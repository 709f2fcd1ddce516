//! Type checkers.
//!
//! One pure function per rule type. Each inspects a single value (`None` when
//! the field is missing from the input) and returns the template key of the
//! first constraint it violates, or `None` when the value is valid. Checks run
//! in a fixed order: required, type, max, min, then pattern.

use crate::TemplateKey;
use crate::value::Value;
use fieldcheck_core::{Constraint, FieldType, Rule, TypeRule};

/// Checks `value` against `rule`.
pub fn check(rule: &Rule, value: Option<&Value>) -> Option<TemplateKey> {
    match rule.kind {
        TypeRule::Integer { .. } => check_integer(rule, value),
        TypeRule::Number { .. } => check_number(rule, value),
        TypeRule::String { .. } => check_string(rule, value),
        TypeRule::Boolean => check_boolean(rule, value),
    }
}

/// Missing, null, empty string and NaN all count as absent.
pub fn check_integer(rule: &Rule, value: Option<&Value>) -> Option<TemplateKey> {
    let key = |constraint| Some(TemplateKey::new(FieldType::Integer, constraint));

    let Some(value) = numeric_present(value) else {
        return if rule.required {
            key(Constraint::Required)
        } else {
            None
        };
    };

    let n = match value {
        Value::Int(i) => *i as f64,
        Value::Float(f) if f.fract() == 0.0 => *f,
        _ => return key(Constraint::Type),
    };

    bounds(rule, n).and_then(key)
}

/// Like [`check_integer`] without the whole-number requirement. Infinite
/// values fail the type check.
pub fn check_number(rule: &Rule, value: Option<&Value>) -> Option<TemplateKey> {
    let key = |constraint| Some(TemplateKey::new(FieldType::Number, constraint));

    let Some(value) = numeric_present(value) else {
        return if rule.required {
            key(Constraint::Required)
        } else {
            None
        };
    };

    let n = match value.as_f64() {
        Some(n) if n.is_finite() => n,
        _ => return key(Constraint::Type),
    };

    bounds(rule, n).and_then(key)
}

/// Null and any value whose text is blank count as absent. Bounds apply to the
/// length in characters.
pub fn check_string(rule: &Rule, value: Option<&Value>) -> Option<TemplateKey> {
    let key = |constraint| Some(TemplateKey::new(FieldType::String, constraint));

    let present = value.filter(|v| !v.is_null() && !v.to_display_string().trim().is_empty());
    let Some(value) = present else {
        // Required strings share the integer template key.
        return if rule.required {
            Some(TemplateKey::new(FieldType::Integer, Constraint::Required))
        } else {
            None
        };
    };

    let Some(text) = value.as_str() else {
        return key(Constraint::Type);
    };

    if let Some(constraint) = bounds(rule, text.chars().count() as f64) {
        return key(constraint);
    }

    match rule.pattern() {
        Some(pattern) if !pattern.is_match(text) => key(Constraint::Pattern),
        _ => None,
    }
}

/// Only a missing field counts as absent; null and the empty string fail the
/// type check instead.
pub fn check_boolean(rule: &Rule, value: Option<&Value>) -> Option<TemplateKey> {
    let Some(value) = value else {
        // Required booleans share the integer template key.
        return rule
            .required
            .then(|| TemplateKey::new(FieldType::Integer, Constraint::Required));
    };

    match value {
        Value::Bool(_) => None,
        _ => Some(TemplateKey::new(FieldType::Boolean, Constraint::Type)),
    }
}

fn numeric_present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| match v {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        other => !other.is_nan(),
    })
}

/// Inclusive bound check; `max` is tested before `min`.
fn bounds(rule: &Rule, n: f64) -> Option<Constraint> {
    if rule.max().is_some_and(|max| n > max) {
        return Some(Constraint::Max);
    }
    if rule.min().is_some_and(|min| n < min) {
        return Some(Constraint::Min);
    }
    None
}
