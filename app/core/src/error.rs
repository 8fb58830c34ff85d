//! Client Error Types

use thiserror::Error;

/// Client-side result type alias
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced by the client core
#[derive(Debug, Error)]
pub enum ClientError {
    /// The session is not authenticated and the operation requires it
    #[error("Not logged in")]
    NotAuthenticated,

    /// The server answered with an error body
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Transport-level failure (connect, timeout, TLS)
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Local storage failure
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// The response body did not parse
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// The string shown in a user-facing alert. Server-provided messages
    /// ("Invalid credentials", "Email is already in use") pass through;
    /// everything else collapses into one generic line so transport and
    /// parse details never reach the user.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            ClientError::NotAuthenticated => "Please log in first.".to_string(),
            _ => "Something went wrong.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_message_passes_through() {
        let err = ClientError::Api {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.user_message(), "Invalid credentials");
    }

    #[test]
    fn test_transport_errors_stay_generic() {
        let err = ClientError::Storage(std::io::Error::other("disk gone"));
        assert_eq!(err.user_message(), "Something went wrong.");
    }
}
