//! Intent classification for spoken drive commands
//!
//! This crate maps noisy speech transcriptions onto a closed set of motion
//! intents using ordered keyword rules. Classification is total: input that
//! matches no rule falls back to the stop intent, so callers always get a
//! dispatchable command.

mod classifier;
mod intent;

pub use classifier::{classify, Classification, RULES};
pub use intent::{FeedbackColor, MotionIntent};

use serde::{Deserialize, Serialize};

/// Feedback behavior for the unrecognized-utterance fallback.
///
/// The fallback issues the same stop command as an explicit "stop", but the
/// indicator can either keep the distinct fallback color or collapse to the
/// stop color. Which is right for an installation is an operator choice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeedbackPolicy {
    /// Show blue for unrecognized input instead of the stop intent's red.
    pub distinct_fallback: bool,
}

impl Default for FeedbackPolicy {
    fn default() -> Self {
        Self {
            distinct_fallback: true,
        }
    }
}
