//! HTML result fragments
//!
//! Turns a verdict into the markup placed in a result slot: a header with
//! the verdict label and a rounded percentage badge, an optional warnings
//! block, and label/value grids in insertion order.
//!
//! Rendering is pure. The same verdict always yields the same bytes.

use crate::core::models::{ScoreTier, TextVerdict, VideoVerdict};

/// Render a text verdict
#[must_use]
pub fn text_fragment(verdict: &TextVerdict) -> String {
    let mut html = String::from("<div class=\"analysis-result\">\n");
    push_header(&mut html, verdict.verdict.as_str(), verdict.tier(), verdict.confidence, "Risk");

    if !verdict.warnings.is_empty() {
        html.push_str("  <div class=\"warnings\">\n");
        html.push_str("    <h4>⚠️ Warning Signs:</h4>\n");
        html.push_str("    <ul>\n");
        for warning in &verdict.warnings {
            html.push_str(&format!("      <li>{}</li>\n", escape(warning)));
        }
        html.push_str("    </ul>\n");
        html.push_str("  </div>\n");
    }

    push_grid(&mut html, verdict.details.iter().map(|s| (s.label, s.value.to_string())));
    html.push_str("</div>\n");
    html
}

/// Render a video verdict
#[must_use]
pub fn video_fragment(verdict: &VideoVerdict) -> String {
    let mut html = String::from("<div class=\"analysis-result\">\n");
    push_header(
        &mut html,
        verdict.verdict.as_str(),
        verdict.tier(),
        verdict.authenticity,
        "Authentic",
    );

    let frames = &verdict.frame_analysis;
    push_grid(
        &mut html,
        [
            ("Total Frames", frames.total_frames.to_string()),
            ("Suspicious Frames", frames.suspicious_frames.to_string()),
            ("Processing Time", frames.processing_time.clone()),
        ],
    );

    html.push_str("  <h4>Detailed Analysis:</h4>\n");
    push_grid(&mut html, verdict.details.iter().map(|s| (s.label, s.value.to_string())));
    html.push_str("</div>\n");
    html
}

fn push_header(html: &mut String, label: &str, tier: ScoreTier, score: f64, suffix: &str) {
    html.push_str("  <div class=\"result-header\">\n");
    html.push_str(&format!("    <h3>{}</h3>\n", escape(label)));
    html.push_str(&format!(
        "    <span class=\"confidence-score {}\">{:.0}% {suffix}</span>\n",
        tier.css_class(),
        score.round()
    ));
    html.push_str("  </div>\n");
}

fn push_grid<'a>(html: &mut String, items: impl IntoIterator<Item = (&'a str, String)>) {
    html.push_str("  <div class=\"result-details\">\n");
    for (label, value) in items {
        html.push_str("    <div class=\"detail-item\">\n");
        html.push_str(&format!("      <div class=\"detail-label\">{}</div>\n", escape(label)));
        html.push_str(&format!("      <div class=\"detail-value\">{}</div>\n", escape(&value)));
        html.push_str("    </div>\n");
    }
    html.push_str("  </div>\n");
}

/// Escape text for an HTML text node or attribute
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
