//! Translator configuration
//!
//! Options can be built in code or loaded from TOML or JSON files:
//!
//! ```toml
//! [forward]
//! include_version = true
//! energyplus_version = "9.6"
//! warn_on_untranslated = false
//!
//! [reverse]
//! strict_references = true
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Error loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Options controlling model to IDF translation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForwardTranslatorOptions {
    /// Emit a `Version` record first
    #[serde(default = "default_include_version")]
    pub include_version: bool,

    /// Version identifier written to the `Version` record
    #[serde(default = "default_energyplus_version")]
    pub energyplus_version: String,

    /// Log a warning for every model object with no external counterpart
    #[serde(default)]
    pub warn_on_untranslated: bool,
}

fn default_include_version() -> bool {
    true
}

fn default_energyplus_version() -> String {
    "9.6".to_string()
}

impl Default for ForwardTranslatorOptions {
    fn default() -> Self {
        Self {
            include_version: default_include_version(),
            energyplus_version: default_energyplus_version(),
            warn_on_untranslated: false,
        }
    }
}

/// Options controlling IDF to model translation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReverseTranslatorOptions {
    /// Log a warning for every reference naming a record that does not exist
    #[serde(default = "default_strict_references")]
    pub strict_references: bool,
}

fn default_strict_references() -> bool {
    true
}

impl Default for ReverseTranslatorOptions {
    fn default() -> Self {
        Self {
            strict_references: default_strict_references(),
        }
    }
}

/// Combined translator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TranslatorConfig {
    #[serde(default)]
    pub forward: ForwardTranslatorOptions,
    #[serde(default)]
    pub reverse: ReverseTranslatorOptions,
}

impl TranslatorConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Report everything: untranslated objects and unresolved references
    pub fn strict() -> Self {
        Self {
            forward: ForwardTranslatorOptions {
                warn_on_untranslated: true,
                ..Default::default()
            },
            reverse: ReverseTranslatorOptions {
                strict_references: true,
            },
        }
    }

    /// Set whether a `Version` record is emitted
    pub fn with_version_record(mut self, include: bool) -> Self {
        self.forward.include_version = include;
        self
    }

    /// Set the version identifier written to the `Version` record
    pub fn with_energyplus_version(mut self, version: impl Into<String>) -> Self {
        self.forward.energyplus_version = version.into();
        self
    }

    /// Set whether untranslated objects are reported
    pub fn with_untranslated_warnings(mut self, warn: bool) -> Self {
        self.forward.warn_on_untranslated = warn;
        self
    }

    /// Set whether unresolved references are reported
    pub fn with_strict_references(mut self, strict: bool) -> Self {
        self.reverse.strict_references = strict;
        self
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a `.toml` or `.json` file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&text),
            Some("json") => Self::from_json_str(&text),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    /// Load from a `.toml` or `.json` file, with the path in the error context
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        Self::from_path(path).with_context(|| format!("Failed to load config file {}", path.display()))
    }
}
