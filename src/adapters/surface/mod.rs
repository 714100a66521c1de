//! Analysis surfaces
//!
//! - [`TerminalSurface`] - Prints busy/idle transitions to stderr and the
//!   result fragment to stdout (CLI)
//! - [`CollectingSurface`] - Keeps everything in memory (HTTP API)

use std::io::Write;

use crate::core::ports::AnalysisSurface;

/// Surface that writes to the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalSurface {
    /// Print the rendered fragment to stdout
    pub print_fragment: bool,
}

impl TerminalSurface {
    /// Create a terminal surface
    #[must_use]
    pub const fn new(print_fragment: bool) -> Self {
        Self { print_fragment }
    }
}

impl AnalysisSurface for TerminalSurface {
    fn set_busy(&mut self, label: &str) {
        eprintln!("{label}");
    }

    fn set_idle(&mut self, label: &str) {
        log::debug!("Trigger restored: {label}");
    }

    fn present(&mut self, fragment: &str) -> std::io::Result<()> {
        if self.print_fragment {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(fragment.as_bytes())?;
            stdout.flush()?;
        }
        Ok(())
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("Error: {message}");
    }
}

/// Surface that records its latest state in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectingSurface {
    /// Whether the trigger is currently disabled
    pub busy: bool,
    /// Current trigger label
    pub label: String,
    /// Last presented fragment
    pub fragment: Option<String>,
    /// Last error message
    pub error: Option<String>,
}

impl AnalysisSurface for CollectingSurface {
    fn set_busy(&mut self, label: &str) {
        self.busy = true;
        self.label = label.to_string();
    }

    fn set_idle(&mut self, label: &str) {
        self.busy = false;
        self.label = label.to_string();
    }

    fn present(&mut self, fragment: &str) -> std::io::Result<()> {
        self.fragment = Some(fragment.to_string());
        Ok(())
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }
}
