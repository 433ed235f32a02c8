//! `AppConfig` struct and TOML loading.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Default TMDB response language.
const DEFAULT_LANGUAGE: &str = "en-US";

/// Top-level application configuration.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// TMDB request settings.
    #[serde(default)]
    pub tmdb: TmdbConfig,
    /// Celebrity list defaults.
    #[serde(default)]
    pub celebrities: CelebritiesConfig,
}

/// TMDB request settings.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct TmdbConfig {
    /// Response language (e.g., "en-US", "ja-JP").
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

fn default_language() -> String {
    String::from(DEFAULT_LANGUAGE)
}

/// Defaults for `celebs list`; command-line flags take precedence.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct CelebritiesConfig {
    /// Number of popular pages to load.
    #[serde(default)]
    pub pages: Option<u32>,
    /// Default region filter.
    #[serde(default)]
    pub region: Option<String>,
    /// Default country filter.
    #[serde(default)]
    pub country: Option<String>,
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed,
    /// or if `celebrities.pages` is zero.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        if config.celebrities.pages == Some(0) {
            bail!(
                "invalid {}: celebrities.pages must be at least 1",
                path.display()
            );
        }
        Ok(config)
    }
}
