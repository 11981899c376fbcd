//! Client error types.

use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The server answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    Transport { status: u16 },

    /// The request could not be sent or the response could not be read.
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The collection URL cannot address an item.
    #[error("Invalid collection URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Returns the HTTP status for transport errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Transport { status } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display() {
        let err = ClientError::Transport { status: 500 };
        assert_eq!(err.to_string(), "HTTP error! status: 500");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_decode_error_has_no_status() {
        let err: ClientError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(err.to_string().starts_with("Invalid response"));
        assert_eq!(err.status(), None);
    }
}
