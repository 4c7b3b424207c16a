use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Capability missing: {capability} - {message}")]
    CapabilityMissing { capability: String, message: String },

    #[error("Settings storage error: {0}")]
    Settings(#[from] bridge_traits::error::BridgeError),

    #[error("Stored options are corrupt: {0}")]
    CorruptOptions(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
