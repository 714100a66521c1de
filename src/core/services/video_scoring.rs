//! Video scoring - the mock deepfake heuristic
//!
//! Nothing about the video is inspected. Every field of the verdict is a
//! fresh draw from the random source.

use crate::core::models::{Details, FrameAnalysis, VideoLabel, VideoVerdict};
use crate::core::ports::RandomSource;

/// Fabricate a deepfake verdict
///
/// Draw order: authenticity, the six detail signals top to bottom, then
/// total frames, suspicious frames and processing time.
pub fn score_video<R: RandomSource + ?Sized>(rng: &mut R) -> VideoVerdict {
    let authenticity = rng.unit() * 100.0;

    let mut details = Details::new();
    details.push(
        "Facial Consistency",
        if rng.unit() > 0.5 { "Inconsistent" } else { "Consistent" },
    );
    details.push("Temporal Coherence", if rng.unit() > 0.3 { "Natural" } else { "Suspicious" });
    details.push("Compression Artifacts", if rng.unit() > 0.6 { "Present" } else { "Minimal" });
    details.push(
        "Audio-Visual Sync",
        if rng.unit() > 0.4 { "Synchronized" } else { "Mismatched" },
    );
    details.push("Blinking Patterns", if rng.unit() > 0.5 { "Natural" } else { "Unnatural" });
    details.push("Lip Sync Accuracy", if rng.unit() > 0.3 { "Accurate" } else { "Inaccurate" });

    let total_frames = draw_below(rng, 1000) + 500;
    let suspicious_frames = draw_below(rng, 100);
    let processing_time = format!("{:.1}s", rng.unit().mul_add(30.0, 10.0));

    // Ranges are disjoint, so flagged frames never outnumber the total.
    debug_assert!(suspicious_frames < total_frames);

    VideoVerdict {
        authenticity,
        verdict: VideoLabel::from_authenticity(authenticity),
        details,
        frame_analysis: FrameAnalysis {
            total_frames,
            suspicious_frames,
            processing_time,
        },
    }
}

/// Uniform integer in `[0, bound)`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn draw_below<R: RandomSource + ?Sized>(rng: &mut R, bound: u32) -> u32 {
    let drawn = (rng.unit() * f64::from(bound)).floor() as u32;
    drawn.min(bound - 1)
}
