//! Configuration loader for quire.
//!
//! `defaults/quire.default.toml` is embedded into the binary so that the
//! documented defaults and runtime behavior stay in sync. A site's own
//! `quire.toml` and command line flags are layered on top via [`Loader`]
//! before deserializing into [`QuireConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use quire_markdown::publish::SiteSpec;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/quire.default.toml");

/// Name of the per-site configuration file picked up from the working directory.
pub const SITE_CONFIG_FILE: &str = "quire.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct QuireConfig {
    pub site: SiteConfig,
    pub build: BuildConfig,
    pub log: LogConfig,
}

/// Where the site's inputs and outputs live.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub static_dir: PathBuf,
    pub public_dir: PathBuf,
    pub content_dir: PathBuf,
    pub template: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildConfig {
    pub clean: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

impl From<&QuireConfig> for SiteSpec {
    fn from(config: &QuireConfig) -> Self {
        SiteSpec {
            static_dir: config.site.static_dir.clone(),
            public_dir: config.site.public_dir.clone(),
            content_dir: config.site.content_dir.clone(),
            template: config.site.template.clone(),
            clean: config.build.clean,
        }
    }
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

    /// Apply a single key/value override, e.g. `site.public_dir` from a CLI flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Like [`Loader::set_override`], skipping `None`.
    pub fn set_override_option<I>(self, key: &str, value: Option<I>) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        match value {
            Some(value) => self.set_override(key, value),
            None => Ok(self),
        }
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<QuireConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<QuireConfig, ConfigError> {
    Loader::new().build()
}
