//! Error types for the fantasy football API client.

use fantasy_core::ErrorResponse;
use thiserror::Error;

/// Errors that can occur when talking to the fantasy football API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("API error ({status}): {}", body.message)]
    Api { status: u16, body: ErrorResponse },

    /// A refresh was needed but no refresh token is stored
    #[error("No refresh token available")]
    NoRefreshToken,

    /// Invalid API URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

/// Coarse error classes the views react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 400: field-level problems, shown next to the form
    Validation,
    /// 401: handled by refresh-and-retry or forced logout
    Unauthorized,
    /// 404: stale cache, views refresh their list
    NotFound,
    /// 409: e.g. duplicate week number
    Conflict,
    /// Anything else, including network failures
    Other,
}

impl ClientError {
    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self.status() {
            Some(400) => ErrorKind::Validation,
            Some(401) => ErrorKind::Unauthorized,
            Some(404) => ErrorKind::NotFound,
            Some(409) => ErrorKind::Conflict,
            _ => ErrorKind::Other,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind() == ErrorKind::Unauthorized
    }

    /// Server-provided message, if the body carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { body, .. } if !body.message.is_empty() => Some(&body.message),
            _ => None,
        }
    }

    /// Field violations reported by the server.
    pub fn violations(&self) -> &[String] {
        match self {
            ClientError::Api { body, .. } => &body.violations,
            _ => &[],
        }
    }

    /// Normalized `{ message, violations, statusCode }` view of the error.
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            message: self
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| self.to_string()),
            violations: self.violations().to_vec(),
            status_code: self.status(),
        }
    }

    pub(crate) fn from_status(status: u16, raw_body: &str) -> Self {
        let body = serde_json::from_str::<ErrorResponse>(raw_body).unwrap_or_else(|_| {
            let message = if raw_body.trim().is_empty() {
                format!("Request failed with status {}", status)
            } else {
                raw_body.trim().to_string()
            };
            ErrorResponse::new(message)
        });

        ClientError::Api { status, body }
    }

    pub(crate) fn from_transport(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            ClientError::ServerUnreachable(e.to_string())
        } else {
            ClientError::Request(e)
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        let cases = [
            (400, ErrorKind::Validation),
            (401, ErrorKind::Unauthorized),
            (404, ErrorKind::NotFound),
            (409, ErrorKind::Conflict),
            (500, ErrorKind::Other),
        ];

        for (status, kind) in cases {
            assert_eq!(ClientError::from_status(status, "").kind(), kind);
        }
        assert_eq!(ClientError::NoRefreshToken.kind(), ErrorKind::Other);
    }

    #[test]
    fn test_json_error_body_is_parsed() {
        let err = ClientError::from_status(
            400,
            r#"{"message":"Week number taken","violations":["weekNumber"]}"#,
        );

        assert_eq!(err.server_message(), Some("Week number taken"));
        assert_eq!(err.violations(), ["weekNumber".to_string()]);

        let response = err.to_error_response();
        assert_eq!(response.status_code, Some(400));
        assert_eq!(response.message, "Week number taken");
    }

    #[test]
    fn test_plain_text_error_body_becomes_message() {
        let err = ClientError::from_status(500, "Internal Server Error");
        assert_eq!(err.server_message(), Some("Internal Server Error"));

        let empty = ClientError::from_status(503, "  ");
        assert_eq!(empty.server_message(), Some("Request failed with status 503"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClientError>();
    }
}
