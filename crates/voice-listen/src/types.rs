use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListenConfig {
    pub language: Option<String>,
    pub sample_rate_hz: u32,
    /// Close the recognizer connection after this long with no speech.
    #[serde(default = "default_inactivity_timeout")]
    pub inactivity_timeout_s: u64,
}

fn default_inactivity_timeout() -> u64 {
    60
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            language: Some("en-US".to_string()),
            sample_rate_hz: 16_000,
            inactivity_timeout_s: default_inactivity_timeout(),
        }
    }
}

/// One completed speech segment from the recognizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Utterance {
    pub start_ms: u64,
    pub end_ms: u64,
    pub text: String,
    pub ts: Option<OffsetDateTime>,
}
