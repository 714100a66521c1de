//! Forward command - post raw JSON to the workflow webhook

use std::io::Read;

use anyhow::Context;

use factlens::config::Config;
use factlens::core::services;
use factlens::output::{ForwardResult, OutputMode};

use super::{runtime, transport};

/// Forward a JSON payload and print the webhook's answer
pub fn forward(payload: &str, mode: OutputMode) -> anyhow::Result<()> {
    let raw = if payload == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        payload.to_string()
    };
    let data: serde_json::Value = serde_json::from_str(&raw).context("payload is not valid JSON")?;

    let config = Config::load()?;
    let transport = transport(&config)?;
    let webhooks = &config.webhooks;
    let response = runtime()?.block_on(services::forward_workflow(
        &transport,
        &webhooks.workflow,
        &data,
        webhooks.retry_policy(),
    ))?;

    ForwardResult {
        url: webhooks.workflow.clone(),
        response,
    }
    .render(mode);
    Ok(())
}
