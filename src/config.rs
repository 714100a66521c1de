//! Global configuration management
//!
//! Config is stored at `~/.factlens/config.toml` (or `$FACTLENS_CONFIG`).
//! Every key is optional; a missing file means all defaults.
//!
//! ```toml
//! [webhooks]
//! workflow = "https://hooks.example.com/workflow"
//! contact = "https://hooks.example.com/contact"
//! timeout_secs = 10
//! max_retries = 2
//!
//! [analysis]
//! text_delay_ms = 2000
//! video_delay_ms = 4000
//!
//! [server]
//! port = 8787
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::services::{AnalyzerSettings, MAX_UPLOAD_BYTES, RetryPolicy};
use crate::paths;

/// Default workflow webhook
pub const DEFAULT_WORKFLOW_WEBHOOK: &str =
    "https://pinkp.app.n8n.cloud/webhook-test/4fed089a-df7e-4ece-94e2-23992e3ad029";

/// Default contact webhook
pub const DEFAULT_CONTACT_WEBHOOK: &str =
    "https://pinkp.app.n8n.cloud/webhook-test/5ac3338f-bc94-40a3-8c58-88934112ee09";

/// Errors loading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File exists but could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// File is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },
}

/// Global factlens configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Webhook endpoints and delivery policy
    #[serde(default)]
    pub webhooks: WebhookConfig,
    /// Analyzer behaviour
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// Local API server
    #[serde(default)]
    pub server: ServerConfig,
}

/// Webhook endpoints and delivery policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Workflow automation endpoint (free-form JSON)
    #[serde(default = "default_workflow")]
    pub workflow: String,
    /// Contact form endpoint
    #[serde(default = "default_contact")]
    pub contact: String,
    /// Overall request timeout; unset keeps the transport default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Retries after the first attempt
    #[serde(default)]
    pub max_retries: u32,
    /// First backoff delay
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
    /// Backoff ceiling
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

fn default_workflow() -> String {
    DEFAULT_WORKFLOW_WEBHOOK.to_string()
}

fn default_contact() -> String {
    DEFAULT_CONTACT_WEBHOOK.to_string()
}

const fn default_base_delay_ms() -> u64 {
    500
}

const fn default_max_delay_ms() -> u64 {
    5_000
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            workflow: default_workflow(),
            contact: default_contact(),
            timeout_secs: None,
            max_retries: 0,
            base_delay_ms: default_base_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

impl WebhookConfig {
    /// Retry policy described by this section
    #[must_use]
    pub const fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            base_delay_ms: self.base_delay_ms,
            max_delay_ms: self.max_delay_ms,
        }
    }

    /// Request timeout, if configured
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Analyzer behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Simulated latency of the text checker
    #[serde(default = "default_text_delay_ms")]
    pub text_delay_ms: u64,
    /// Simulated latency of the video checker
    #[serde(default = "default_video_delay_ms")]
    pub video_delay_ms: u64,
    /// Upload size cap in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,
}

const fn default_text_delay_ms() -> u64 {
    2_000
}

const fn default_video_delay_ms() -> u64 {
    4_000
}

const fn default_max_upload_bytes() -> u64 {
    MAX_UPLOAD_BYTES
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            text_delay_ms: default_text_delay_ms(),
            video_delay_ms: default_video_delay_ms(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl AnalysisConfig {
    /// Orchestrator settings described by this section
    #[must_use]
    pub const fn analyzer_settings(&self) -> AnalyzerSettings {
        AnalyzerSettings {
            text_delay: Duration::from_millis(self.text_delay_ms),
            video_delay: Duration::from_millis(self.video_delay_ms),
        }
    }
}

/// Local API server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,
}

const fn default_port() -> u16 {
    8787
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Config {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load the config from its default location
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load a config file, or defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save config to its default location
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
