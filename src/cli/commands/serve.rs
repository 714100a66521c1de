//! Serve command - local HTTP API

use factlens::api::ApiContext;
use factlens::config::Config;
use factlens::server;

/// Start the API server
pub fn serve(port: Option<u16>) -> anyhow::Result<()> {
    let config = Config::load()?;
    let port = port.unwrap_or(config.server.port);
    let ctx = ApiContext::from_config(config)?;

    println!("Starting factlens API...");
    println!("Listening on http://localhost:{port}/api");
    println!();
    println!("Press Ctrl+C to stop");

    server::serve(&ctx, port)
}
