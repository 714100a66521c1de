//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and everything the analyzers talk to: the random source, the
//! on-screen controls, and the webhook transport.
//!
//! Implementations live in the `adapters` module (and in test mocks).
//!
//! ## Design Principle
//!
//! The core domain logic depends only on these traits, never on concrete
//! implementations. Scoring is a pure function of (input, random source),
//! and the orchestrator never looks up global UI state.

mod random;
mod surface;
mod webhook;

pub use random::{Draws, RandomSource};
pub use surface::AnalysisSurface;
pub use webhook::{WebhookResponse, WebhookTransport};
