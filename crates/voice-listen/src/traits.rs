use crate::{ListenConfig, Utterance};
use drive_intent::FeedbackColor;

/// Pull-style delivery of completed speech segments, one at a time.
pub trait UtteranceSource {
    fn new(config: ListenConfig) -> Self
    where
        Self: Sized;

    /// Next completed utterance, or `None` when the source is drained.
    fn poll(&mut self) -> Option<Utterance>;
}

/// Visual feedback shown once per classified utterance.
pub trait Indicator {
    fn set_color(&mut self, color: FeedbackColor);
}
