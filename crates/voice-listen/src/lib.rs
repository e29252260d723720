//! voice-listen: listening-bridge boundary traits with mock backends
//!
//! The speech engine and the indicator hardware live outside this system;
//! this crate defines the seams they plug into and ships mocks so the
//! bridge loop runs and tests without a microphone or an LED.

mod types;
pub use types::{ListenConfig, Utterance};

mod traits;
pub use traits::{Indicator, UtteranceSource};

#[cfg(feature = "mock")]
mod mock;
#[cfg(feature = "mock")]
pub use mock::{MockIndicator, MockUtterances};
