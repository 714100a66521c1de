//! Contact form data

use serde::{Deserialize, Serialize};

/// Contact form fields, also the JSON body posted to the contact webhook
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Message body
    pub message: String,
}

impl ContactMessage {
    /// Create a message
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Empty every field, like a form reset
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    /// Whether every field is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// Status text shown next to the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusLine(String);

impl StatusLine {
    /// Replace the status text
    pub fn set(&mut self, text: impl Into<String>) {
        self.0 = text.into();
    }

    /// Current status text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
