//! Command implementations

mod analyze;
mod config_cmd;
mod contact;
mod forward;
mod select;
#[cfg(feature = "ui")]
mod serve;

pub use analyze::{analyze_text, analyze_video};
pub use config_cmd::config;
pub use contact::contact;
pub use forward::forward;
pub use select::select;
#[cfg(feature = "ui")]
pub use serve::serve;

use factlens::adapters::HttpTransport;
use factlens::config::Config;

/// Runtime for commands that await the orchestrator or a webhook
fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread().enable_all().build()?)
}

/// Transport configured from the `[webhooks]` section
fn transport(config: &Config) -> anyhow::Result<HttpTransport> {
    Ok(HttpTransport::new(config.webhooks.timeout())?)
}
