use thiserror::Error;

pub type Result<T, E = DispatchError> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),
    #[error("transport failure reaching drive server: {0}")]
    Transport(reqwest::Error),
    #[error("drive server answered {0}")]
    Status(reqwest::StatusCode),
}
