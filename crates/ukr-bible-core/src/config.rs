//! Configuration types for ukr-bible.
//!
//! [`Config::load`] reads `~/.config/ukr-bible/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use crate::types::Sampling;
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[corpus]
# data_path = "/path/to/ukr_bible_data.json"

[random]
sampling = "stratified"

[output]
format = "text"

# [[aliases]]
# book  = "1М"
# names = ["ген", "genesis"]
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/ukr-bible/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub random: RandomConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub aliases: Vec<AliasConfig>,
}

/// `[corpus]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorpusConfig {
    /// Data file to load. `None` means the bundled sample file.
    #[serde(default)]
    pub data_path: Option<PathBuf>,
}

/// `[random]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RandomConfig {
    #[serde(default)]
    pub sampling: Sampling,
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One `[[aliases]]` entry: extra names for an existing book key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AliasConfig {
    pub book: String,
    #[serde(default)]
    pub names: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/ukr-bible/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_or_create(&config_path())
    }

    /// Like [`Config::load`] but for an explicit path.
    ///
    /// Failing to write the default file only logs a warning; the defaults
    /// are still used. A file that exists but cannot be parsed is an error.
    pub fn load_or_create(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            if let Err(err) = write_default(path) {
                tracing::warn!(path = %path.display(), error = %err, "could not create default config");
            }
        }

        Self::load_from(path).with_context(|| format!("reading config {}", path.display()))
    }

    /// Layer the file at `path` (if present) over the built-in defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn write_default(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, DEFAULT_CONFIG.trim_start())
}

/// `$XDG_CONFIG_HOME/ukr-bible/config.toml`, falling back to `~/.config`.
pub fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("ukr-bible")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
