//! Validator configuration.

use serde::{Deserialize, Serialize};

/// Locale used when none is configured or the configured one is unknown.
pub const DEFAULT_LANGUAGE: &str = "en_US";

/// Options fixed when a validator is created.
///
/// # Example
///
/// ```rust
/// use fieldcheck_core::ValidatorConfig;
///
/// let config = ValidatorConfig::new().with_language("zh_CN").with_convert(false);
/// assert_eq!(config.language, "zh_CN");
/// assert!(!config.convert);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Locale identifier for error messages (e.g. `en_US`)
    pub language: String,

    /// Whether input values are coerced to the rule's type before checking
    pub convert: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            convert: true,
        }
    }
}

impl ValidatorConfig {
    /// Creates a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message locale.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Enables or disables input coercion.
    pub fn with_convert(mut self, convert: bool) -> Self {
        self.convert = convert;
        self
    }
}
