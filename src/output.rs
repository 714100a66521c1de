//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::config::Config;
use crate::core::models::{Details, TextVerdict, UploadPreview, VideoVerdict};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a text/URL analysis
#[derive(Debug, Serialize)]
pub struct TextReport {
    /// The verdict
    #[serde(flatten)]
    pub verdict: TextVerdict,
    /// Workflow webhook answer, when the result was forwarded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forwarded: Option<serde_json::Value>,
}

/// Result of a video analysis
#[derive(Debug, Serialize)]
pub struct VideoReport {
    /// File name or URL that was analyzed
    pub source: String,
    /// The verdict
    #[serde(flatten)]
    pub verdict: VideoVerdict,
    /// Workflow webhook answer, when the result was forwarded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forwarded: Option<serde_json::Value>,
}

/// Result of a contact submission
#[derive(Debug, Serialize)]
pub struct ContactResult {
    /// Whether the webhook accepted the message
    pub delivered: bool,
    /// Final status line
    pub status: String,
}

/// Result of a raw workflow forward
#[derive(Debug, Serialize)]
pub struct ForwardResult {
    /// Webhook that was called
    pub url: String,
    /// Parsed JSON answer
    pub response: serde_json::Value,
}

/// Result of selecting a video file
#[derive(Debug, Serialize)]
pub struct SelectResult {
    /// Whether the file was accepted
    pub accepted: bool,
    /// Preview shown for an accepted file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<UploadPreview>,
    /// Rejection message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Effective configuration
#[derive(Debug, Serialize)]
pub struct ConfigReport {
    /// File the config was read from (may not exist)
    pub path: String,
    /// Values in effect
    pub config: Config,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn print_details(details: &Details) {
    for signal in details {
        println!("  {:<22} {}", format!("{}:", signal.label), signal.value);
    }
}

fn print_forwarded(forwarded: Option<&serde_json::Value>) {
    if let Some(answer) = forwarded {
        println!("\nForwarded to workflow: {answer}");
    }
}

impl TextReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        let v = &self.verdict;
        println!("{} ({:.0}% Risk)\n", v.verdict, v.confidence);

        if !v.warnings.is_empty() {
            println!("Warning Signs:");
            for warning in &v.warnings {
                println!("  - {warning}");
            }
            println!();
        }

        print_details(&v.details);
        print_forwarded(self.forwarded.as_ref());
    }
}

impl VideoReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        let v = &self.verdict;
        println!("{}: {} ({:.0}% Authentic)\n", self.source, v.verdict, v.authenticity);

        let frames = &v.frame_analysis;
        println!("  Total Frames:      {}", frames.total_frames);
        println!("  Suspicious Frames: {}", frames.suspicious_frames);
        println!("  Processing Time:   {}", frames.processing_time);

        println!("\nDetailed Analysis:");
        print_details(&v.details);
        print_forwarded(self.forwarded.as_ref());
    }
}

impl ContactResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.status),
            OutputMode::Json => print_json(self),
        }
    }
}

impl ForwardResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Forwarded to {}", self.url);
                println!(
                    "{}",
                    serde_json::to_string_pretty(&self.response).unwrap_or_default()
                );
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl SelectResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if let Some(preview) = &self.preview {
            println!("{}", preview.file_name);
            println!("{}", preview.size_label);
        } else if let Some(message) = &self.message {
            println!("{message}");
        }
    }
}

impl ConfigReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("# {}", self.path);
                print!("{}", toml::to_string_pretty(&self.config).unwrap_or_default());
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl OperationResult {
    /// Create a success result
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Create a failure result
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.success {
                    println!("{}", self.message);
                } else {
                    eprintln!("Error: {}", self.message);
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}
