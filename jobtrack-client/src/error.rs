//! Error types for the tracker client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the tracker API
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS, TLS, ...)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error (status {status}): {body}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body as text, possibly empty
        body: String,
    },

    /// Response arrived but its body was not what we expected
    #[error("Failed to parse response: {message}")]
    ParseError {
        message: String,
        /// Raw body, kept for diagnostics
        body: String,
    },
}

impl ClientError {
    /// Create an API error from status code and body
    pub fn api_error(status: u16, body: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            body: body.into(),
        }
    }

    /// HTTP status, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::RequestFailed(err) => err.status().map(|s| s.as_u16()),
            Self::ParseError { .. } => None,
        }
    }

    /// Response body captured for diagnostics, if any
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::ApiError { body, .. } | Self::ParseError { body, .. } => Some(body),
            Self::RequestFailed(_) => None,
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if (400..500).contains(status))
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let not_found = ClientError::api_error(404, r#"{"detail":"Job not found"}"#);
        assert!(not_found.is_not_found());
        assert!(not_found.is_client_error());
        assert!(!not_found.is_server_error());
        assert_eq!(not_found.status(), Some(404));
        assert_eq!(not_found.body(), Some(r#"{"detail":"Job not found"}"#));

        let server = ClientError::api_error(500, "boom");
        assert!(server.is_server_error());
        assert!(!server.is_client_error());
    }

    #[test]
    fn test_parse_error_keeps_body() {
        let err = ClientError::ParseError {
            message: "expected value".to_string(),
            body: "<html>".to_string(),
        };
        assert_eq!(err.status(), None);
        assert_eq!(err.body(), Some("<html>"));
        assert_eq!(err.to_string(), "Failed to parse response: expected value");
    }
}
