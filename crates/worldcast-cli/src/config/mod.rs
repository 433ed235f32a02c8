//! Application configuration module.
//!
//! Manages the TOML config file holding the TMDB response language and
//! default celebrity list settings.

#[allow(clippy::module_inception)]
mod config;
mod paths;

#[allow(clippy::module_name_repetitions)]
pub use config::{AppConfig, CelebritiesConfig};
pub use paths::resolve_config_path;
