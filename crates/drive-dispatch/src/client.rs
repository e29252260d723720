//! HTTP client for the drive-control server

use crate::{DispatchError, EndpointConfig, Result};
use drive_intent::MotionIntent;
use tracing::{debug, error, warn};

/// Body of one drive command, `{"drive":"<wire form>"}`.
#[derive(serde::Serialize)]
struct DrivePayload<'a> {
    drive: &'a str,
}

/// One-shot command client. Cheap to clone; all clones share the same
/// connection pool.
#[derive(Clone)]
pub struct DriveClient {
    url: String,
    client: reqwest::Client,
}

impl DriveClient {
    /// Build a client for the configured endpoint.
    ///
    /// Failure here is a startup error; per-utterance sends never fail to
    /// construct their payload.
    pub fn new(endpoint: &EndpointConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(DispatchError::Client)?;
        Ok(Self {
            url: endpoint.url(),
            client,
        })
    }

    /// POST one drive command and read the response to completion.
    ///
    /// Exactly one attempt, no retry. The response body is logged at debug
    /// level and discarded; it never affects control flow. A non-success
    /// status is reported as [`DispatchError::Status`] for observability.
    pub async fn send(&self, intent: MotionIntent) -> Result<()> {
        let payload = DrivePayload {
            drive: intent.wire_str(),
        };
        let resp = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(DispatchError::Transport)?;
        let status = resp.status();
        let body = resp.text().await.map_err(DispatchError::Transport)?;
        debug!("drive server answered {}: {}", status, body.trim());
        if !status.is_success() {
            warn!("drive command {} rejected with {}", intent, status);
            return Err(DispatchError::Status(status));
        }
        Ok(())
    }

    /// Fire-and-forget dispatch.
    ///
    /// Runs [`DriveClient::send`] as an independent task. Any failure is
    /// logged exactly once and goes no further; the caller never blocks on
    /// network completion. Overlapping dispatches are unordered and share
    /// nothing but the connection pool.
    pub fn send_detached(&self, intent: MotionIntent) {
        let client = self.clone();
        tokio::spawn(async move {
            if let Err(e) = client.send(intent).await {
                error!("dispatch of {} failed: {}", intent, e);
            }
        });
    }
}
