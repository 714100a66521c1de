//! factlens - mock misinformation and deepfake checks with webhook forwarding
//!
//! This library provides the scoring heuristics, the analysis orchestrator,
//! the HTML result renderer, the webhook forwarder, and the HTTP-agnostic
//! API used by the `factlens` binary and its local server.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
pub mod render;
#[cfg(feature = "ui")]
pub mod server;
