//! Centralized path definitions for factlens
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.factlens/
//! └── config.toml               # Webhook URLs, latencies, server port
//! ```
//!
//! `FACTLENS_CONFIG` points at a different config file when set.

use std::path::PathBuf;

/// Global config directory name
const GLOBAL_DIR: &str = ".factlens";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "FACTLENS_CONFIG";

/// Get the global factlens directory.
///
/// Returns `~/.factlens/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the config file path.
///
/// Returns `$FACTLENS_CONFIG` when set and non-empty, else
/// `~/.factlens/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => global_config_dir().join(GLOBAL_CONFIG_FILE),
    }
}
