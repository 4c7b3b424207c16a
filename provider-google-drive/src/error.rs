//! Error types for Google Drive provider

use thiserror::Error;

/// Coarse error classification seen by callers of the tree builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// API key missing or blank; no network call was made
    Config,
    /// Malformed root URL
    InvalidArgument,
    /// Any HTTP-layer failure of any request in any level
    Remote,
}

/// Google Drive provider errors
#[derive(Error, Debug)]
pub enum GoogleDriveError {
    /// No usable API key was supplied
    #[error("Google API key is missing or empty")]
    MissingApiKey,

    /// The folder URL could not be turned into a folder id
    #[error("Invalid folder URL: {0}")]
    InvalidUrl(String),

    /// API request returned a non-success status
    #[error("Google Drive API error (status {status_code}): {message}")]
    ApiError { status_code: u16, message: String },

    /// Failed to parse API response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Network error
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Bridge error
    #[error(transparent)]
    BridgeError(#[from] bridge_traits::error::BridgeError),
}

impl GoogleDriveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GoogleDriveError::MissingApiKey => ErrorKind::Config,
            GoogleDriveError::InvalidUrl(_) => ErrorKind::InvalidArgument,
            GoogleDriveError::ApiError { .. }
            | GoogleDriveError::ParseError(_)
            | GoogleDriveError::NetworkError(_)
            | GoogleDriveError::BridgeError(_) => ErrorKind::Remote,
        }
    }

    pub fn is_remote(&self) -> bool {
        self.kind() == ErrorKind::Remote
    }
}

/// Result type for Google Drive operations
pub type Result<T> = std::result::Result<T, GoogleDriveError>;

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::error::BridgeError;

    #[test]
    fn test_error_display() {
        let error = GoogleDriveError::ApiError {
            status_code: 404,
            message: "File not found: 1AbC.".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Google Drive API error (status 404): File not found: 1AbC."
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(GoogleDriveError::MissingApiKey.kind(), ErrorKind::Config);
        assert_eq!(
            GoogleDriveError::InvalidUrl("x".to_string()).kind(),
            ErrorKind::InvalidArgument
        );
        assert!(GoogleDriveError::ParseError("eof".to_string()).is_remote());
        assert!(GoogleDriveError::NetworkError("reset".to_string()).is_remote());
    }

    #[test]
    fn test_bridge_error_conversion() {
        let error: GoogleDriveError = BridgeError::Timeout("30s".to_string()).into();

        assert!(matches!(error, GoogleDriveError::BridgeError(_)));
        assert_eq!(error.kind(), ErrorKind::Remote);
    }
}
