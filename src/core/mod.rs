//! Core domain logic for factlens
//!
//! This module contains the analyzers and the forwarder with no direct I/O.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (inputs, verdicts, contact message, errors)
//! - `services/` - Scoring, validation, orchestration, forwarding
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
