//! Config command - show (and optionally create) the config file

use factlens::config::Config;
use factlens::output::{ConfigReport, OperationResult, OutputMode};

/// Print the effective configuration
pub fn config(init: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = Config::config_path();

    if init {
        if path.exists() {
            OperationResult::success(format!("Config already exists at {}", path.display()))
                .render(mode);
        } else {
            Config::default().save()?;
            OperationResult::success(format!("Wrote defaults to {}", path.display())).render(mode);
        }
        return Ok(());
    }

    let config = Config::load()?;
    ConfigReport {
        path: path.display().to_string(),
        config,
    }
    .render(mode);
    Ok(())
}
