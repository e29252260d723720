use crate::{Indicator, ListenConfig, Utterance, UtteranceSource};
use drive_intent::FeedbackColor;
use time::OffsetDateTime;

/// Scripted utterance source for tests and demo runs.
pub struct MockUtterances {
    _cfg: ListenConfig,
    script: Vec<String>,
    next: usize,
}

impl MockUtterances {
    pub fn with_script(config: ListenConfig, script: Vec<String>) -> Self {
        Self {
            _cfg: config,
            script,
            next: 0,
        }
    }
}

impl UtteranceSource for MockUtterances {
    fn new(config: ListenConfig) -> Self
    where
        Self: Sized,
    {
        Self::with_script(
            config,
            vec![
                "drive forward".to_string(),
                "turn counter-clockwise".to_string(),
                "stop".to_string(),
            ],
        )
    }

    fn poll(&mut self) -> Option<Utterance> {
        let idx = self.next as u64;
        let text = self.script.get(self.next)?.clone();
        self.next += 1;
        Some(Utterance {
            start_ms: idx * 1000,
            end_ms: (idx + 1) * 1000,
            text,
            ts: Some(OffsetDateTime::now_utc()),
        })
    }
}

/// Indicator that records every color it is asked to show.
#[derive(Debug, Default)]
pub struct MockIndicator {
    pub history: Vec<FeedbackColor>,
}

impl Indicator for MockIndicator {
    fn set_color(&mut self, color: FeedbackColor) {
        tracing::debug!("indicator -> {}", color);
        self.history.push(color);
    }
}
