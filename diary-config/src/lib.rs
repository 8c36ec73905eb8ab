//! Shared configuration loader for the diary toolchain.
//!
//! `defaults/diary.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`DiaryConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use diary_markup::{EngineOptions, PreviewOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/diary.default.toml");

/// Top-level configuration consumed by diary applications.
#[derive(Debug, Clone, Deserialize)]
pub struct DiaryConfig {
    pub markup: MarkupConfig,
    pub preview: PreviewConfig,
    pub listing: ListingConfig,
}

/// Knobs of the markup engine.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkupConfig {
    pub link_class: String,
    /// Zero means unlimited.
    pub max_input_length: usize,
}

impl From<&MarkupConfig> for EngineOptions {
    fn from(config: &MarkupConfig) -> Self {
        EngineOptions {
            link_class: config.link_class.clone(),
            max_input_length: match config.max_input_length {
                0 => None,
                limit => Some(limit),
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PreviewConfig {
    pub max_chars: usize,
    pub ellipsis: String,
}

impl From<&PreviewConfig> for PreviewOptions {
    fn from(config: &PreviewConfig) -> Self {
        PreviewOptions {
            max_chars: config.max_chars,
            ellipsis: config.ellipsis.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingConfig {
    pub page_size: usize,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<DiaryConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<DiaryConfig, ConfigError> {
    Loader::new().build()
}
