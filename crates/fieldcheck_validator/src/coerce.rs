//! Input coercion.
//!
//! Before checking, a validator with `convert` enabled rewrites each input
//! value towards its rule's type. Coercion is best effort: values that cannot
//! be converted are left as they are, and the checker then reports them.

use crate::value::{Record, Value};
use fieldcheck_core::{FieldType, RuleSet};
use tracing::trace;

/// Coerces every field of `input` that has a rule, in place.
///
/// Missing fields and null values are skipped.
pub fn coerce(input: &mut Record, rules: &RuleSet) {
    for (field, rule) in rules.iter() {
        let Some(value) = input.get_mut(field) else {
            continue;
        };
        if value.is_null() {
            continue;
        }

        let converted = match rule.field_type() {
            FieldType::Integer => to_integer(value),
            FieldType::Number => to_number(value),
            FieldType::String => Some(Value::String(value.to_display_string())),
            FieldType::Boolean => Some(Value::Bool(value.is_truthy())),
        };

        match converted {
            Some(converted) => *value = converted,
            None => trace!("Coercion left field '{}' unchanged", field),
        }
    }
}

/// Parses the leading integer of the value's textual form (`"12abc"` → 12,
/// `3.7` → 3). Returns `None` when there is no leading integer.
fn to_integer(value: &Value) -> Option<Value> {
    match value {
        Value::Int(_) => None,
        other => parse_int_prefix(&other.to_display_string()).map(Value::from_f64),
    }
}

/// Converts the value to a number. The empty string and anything that does not
/// parse as a whole number literal are left alone.
fn to_number(value: &Value) -> Option<Value> {
    let n = match value {
        Value::Int(_) | Value::Float(_) => return None,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::String(s) if s.is_empty() => return None,
        Value::String(s) => parse_number(s)?,
        Value::List(_) => parse_number(&value.to_display_string())?,
        Value::Null | Value::Map(_) => return None,
    };

    (!n.is_nan()).then(|| Value::from_f64(n))
}

/// Leading-integer parse: optional whitespace and sign, then decimal digits
/// (or hex digits after `0x`). Trailing text is ignored.
pub(crate) fn parse_int_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let (negative, text) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let (radix, text) = match text.get(..2) {
        Some("0x") | Some("0X") => (16, &text[2..]),
        _ => (10, text),
    };

    let digits: String = text.chars().take_while(|c| c.is_digit(radix)).collect();
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0.0_f64, |acc, d| acc * f64::from(radix) + f64::from(d));

    Some(if negative { -magnitude } else { magnitude })
}

/// Whole-string numeric parse. Surrounding whitespace is ignored and a blank
/// string is zero. Accepts decimal and exponent forms, `0x`/`0o`/`0b`
/// prefixes, and `Infinity`.
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }

    match text {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match text.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &text[2..];
        if !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
    }

    let is_literal = text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !is_literal {
        return None;
    }

    text.parse::<f64>().ok()
}
