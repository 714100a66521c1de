//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `http/` - `reqwest`-backed webhook transport
//! - `surface/` - Terminal and in-memory analysis surfaces

pub mod http;
pub mod surface;

pub use http::HttpTransport;
pub use surface::{CollectingSurface, TerminalSurface};
