//! Analysis surface port
//!
//! Defines the controls an analysis drives: the trigger, the result slot,
//! and the error channel.

/// On-screen slots an analysis reads from and writes to
///
/// The orchestrator receives one of these per trigger instead of looking up
/// global elements. The CLI prints to the terminal, the API collects into a
/// response, tests record every call.
pub trait AnalysisSurface {
    /// Disable the trigger and show a busy label
    fn set_busy(&mut self, label: &str);

    /// Re-enable the trigger with its idle label
    fn set_idle(&mut self, label: &str);

    /// Put a rendered result fragment into the result slot
    fn present(&mut self, fragment: &str) -> std::io::Result<()>;

    /// Surface a user-facing error message
    fn show_error(&mut self, message: &str);
}
