//! Shared configuration loader for the foam-outline tools.
//!
//! `defaults/foam.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`FoamConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use foam_parser::ParseOptions;
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/foam.default.toml");

/// Name of the per-project configuration file picked up from the working directory.
pub const PROJECT_CONFIG_FILE: &str = "foam.toml";

/// Top-level configuration consumed by foam-outline applications.
#[derive(Debug, Clone, Deserialize)]
pub struct FoamConfig {
    pub outline: OutlineConfig,
    pub output: OutputConfig,
    pub lsp: LspConfig,
}

/// Mirrors the knobs exposed by the outline engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct OutlineConfig {
    pub brace_lookahead: usize,
    pub skip_block_comments: bool,
}

impl From<OutlineConfig> for ParseOptions {
    fn from(config: OutlineConfig) -> Self {
        ParseOptions {
            brace_lookahead: config.brace_lookahead,
            skip_block_comments: config.skip_block_comments,
        }
    }
}

impl OutlineConfig {
    pub fn parse_options(&self) -> ParseOptions {
        (*self).into()
    }
}

/// Controls command line output.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
    pub show_line_numbers: bool,
}

/// Language server features.
#[derive(Debug, Clone, Deserialize)]
pub struct LspConfig {
    pub folding_ranges: bool,
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
        self.builder = self.builder.set_override(key, value.into())?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<FoamConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<FoamConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.outline.brace_lookahead, 4);
        assert!(!config.outline.skip_block_comments);
        assert_eq!(config.output.format, "treeviz");
        assert!(!config.output.show_line_numbers);
        assert!(config.lsp.folding_ranges);
    }

    #[test]
    fn defaults_match_engine_defaults() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.outline.parse_options(), ParseOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("outline.brace_lookahead", 8i64)
            .expect("override to apply")
            .set_override("output.format", "json")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.outline.brace_lookahead, 8);
        assert_eq!(config.output.format, "json");
    }

    #[test]
    fn layers_user_file_over_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[outline]\nskip_block_comments = true").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert!(config.outline.skip_block_comments);
        assert_eq!(config.outline.brace_lookahead, 4);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new().with_file("does/not/exist.toml").build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("does/not/exist.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "treeviz");
    }
}
