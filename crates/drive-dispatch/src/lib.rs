//! drive-dispatch: HTTP command client for the drive-control server
//!
//! Relays classified motion intents to the drive server as one-shot JSON
//! POSTs. Dispatch is fire-and-forget from the caller's point of view:
//! a network failure is logged inside the dispatch task and never reaches
//! the listening loop.

mod client;
mod error;
mod types;

pub use client::DriveClient;
pub use error::{DispatchError, Result};
pub use types::EndpointConfig;
