//! Contact command - send a message through the contact webhook

use factlens::config::Config;
use factlens::core::models::{ContactMessage, StatusLine};
use factlens::core::services;
use factlens::output::{ContactResult, OutputMode};

use super::{runtime, transport};

/// Submit the contact form
pub fn contact(name: &str, email: &str, message: &str, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load()?;
    let transport = transport(&config)?;
    let mut form = ContactMessage::new(name, email, message);
    let mut status = StatusLine::default();

    if mode == OutputMode::Human {
        println!("{}", services::CONTACT_SENDING);
    }

    let webhooks = &config.webhooks;
    let delivered = runtime()?.block_on(services::submit_contact(
        &transport,
        &webhooks.contact,
        &mut form,
        &mut status,
        webhooks.retry_policy(),
    ));

    ContactResult {
        delivered,
        status: status.as_str().to_string(),
    }
    .render(mode);

    if !delivered {
        std::process::exit(1);
    }
    Ok(())
}
