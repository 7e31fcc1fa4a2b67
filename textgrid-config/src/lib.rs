//! Shared configuration loader for the textgrid toolchain.
//!
//! `defaults/textgrid.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer
//! user-specific files on top of those defaults via [`Loader`] before
//! deserializing into [`TextgridConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use textgrid::VowelSet;

const DEFAULT_TOML: &str = include_str!("../defaults/textgrid.default.toml");

/// Top-level configuration consumed by textgrid applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TextgridConfig {
    pub transcode: TranscodeConfig,
    pub convert: ConvertConfig,
    pub csv: CsvConfig,
}

/// Label transcoding knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscodeConfig {
    pub retain_diacritics: bool,
    pub extra_vowels: Vec<String>,
}

impl TranscodeConfig {
    /// The vowel inventory for vowel-detection helpers: the built-in set
    /// extended with the configured extras.
    pub fn vowel_set(&self) -> VowelSet {
        VowelSet::with_extra(self.extra_vowels.iter().cloned())
    }
}

/// Conversion defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub default_format: String,
}

/// CSV import/export knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct CsvConfig {
    pub delimiter: char,
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
    pub fn build(self) -> Result<TextgridConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TextgridConfig, ConfigError> {
    Loader::new().build()
}
