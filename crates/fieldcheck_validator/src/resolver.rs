//! Error message resolution.
//!
//! Turns the template key of a failed constraint into the final message for a
//! field: a per-field override is preferred over the locale's template, and the
//! placeholders are then substituted from the field name and its rule.

use crate::value::format_number;
use crate::{Result, TemplateKey, Translations};
use fieldcheck_core::{MessageOverrides, Rule};

/// Placeholder tokens recognised in templates.
const TOKENS: [&str; 5] = [":field", ":min", ":max", ":pattern", ":type"];

/// Everything the resolver needs to know about the field being checked.
///
/// Built fresh for every field of every call; nothing is stored on the
/// validator between calls.
#[derive(Debug, Clone, Copy)]
pub struct FieldContext<'a> {
    /// Field name
    pub field: &'a str,
    /// The field's rule
    pub rule: &'a Rule,
    /// Caller-supplied overrides for this call
    pub overrides: Option<&'a MessageOverrides>,
}

/// Resolves template keys into messages for one locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageResolver {
    translations: Translations,
}

impl MessageResolver {
    /// Creates a resolver over the given translations.
    pub fn new(translations: Translations) -> Self {
        Self { translations }
    }

    /// Returns the translations in use.
    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    /// Produces the message for `key` on the field described by `ctx`.
    ///
    /// Fails only when neither an override nor a locale template exists.
    pub fn resolve(&self, key: TemplateKey, ctx: &FieldContext<'_>) -> Result<String> {
        let overridden = ctx
            .overrides
            .and_then(|overrides| overrides.get(ctx.field, key.constraint));

        let template = match overridden {
            Some(template) => template,
            None => self.translations.template(&key.to_string())?,
        };

        Ok(interpolate(template, ctx.field, ctx.rule))
    }
}

/// Substitutes `:field`, `:min`, `:max` and `:pattern` in `template`.
///
/// Bounds and patterns the rule does not configure are left as literal tokens.
pub fn interpolate(template: &str, field: &str, rule: &Rule) -> String {
    substitute(template, |token| match token {
        ":field" => Some(field.to_string()),
        ":min" => rule.min().map(format_number),
        ":max" => rule.max().map(format_number),
        ":pattern" => rule.pattern().map(|p| p.to_string()),
        _ => None,
    })
}

/// Replaces every known token in one left-to-right pass.
///
/// Substituted text is not scanned again, so a field name containing `:min`
/// stays intact. Tokens for which `lookup` returns `None` are kept verbatim.
pub fn substitute<F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(':') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        let token = TOKENS.iter().find(|token| tail.starts_with(**token));

        match token.and_then(|token| lookup(token).map(|value| (token, value))) {
            Some((token, value)) => {
                out.push_str(&value);
                rest = &tail[token.len()..];
            }
            None => {
                out.push(':');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
