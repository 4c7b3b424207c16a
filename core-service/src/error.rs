use provider_google_drive::{ErrorKind, GoogleDriveError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Drive(#[from] GoogleDriveError),

    #[error("Bridge error: {0}")]
    Bridge(#[from] bridge_traits::error::BridgeError),

    #[error("Runtime error: {0}")]
    Runtime(#[from] core_runtime::Error),

    #[error("Failed to serialize tree: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Classification shared with the tree builder.
    ///
    /// Host capability failures (settings storage, bootstrap) count as
    /// configuration problems; only Drive requests produce `Remote`.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::Config(_) | CoreError::Bridge(_) | CoreError::Runtime(_) => {
                ErrorKind::Config
            }
            CoreError::Drive(e) => e.kind(),
            CoreError::Serialization(_) => ErrorKind::Remote,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
