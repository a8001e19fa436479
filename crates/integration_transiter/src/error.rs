//! Transiter error types

use std::fmt;

use thiserror::Error;

/// Boxed cause attached to the variants that wrap another error
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A classified failure of a client operation
///
/// Exactly one variant describes each failure. See [`crate::classify`] for
/// how raised faults map onto variants.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a 4xx status
    #[error("HTTP {status_code}: {message}")]
    HttpClient {
        status_code: u16,
        message: String,
        /// Raw response body, if it could be read and was not empty
        body: Option<String>,
    },

    /// The server answered with a 5xx status
    #[error("HTTP {status_code}: {message}")]
    HttpServer {
        status_code: u16,
        message: String,
        body: Option<String>,
    },

    /// The server answered with a 3xx status that was not followed
    #[error("Redirect {status_code}: {message}")]
    Redirect {
        status_code: u16,
        message: String,
        /// Value of the `Location` header, if present
        location: Option<String>,
    },

    /// DNS, connect, reset or other I/O failure
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        cause: BoxError,
    },

    /// The response body was not the expected JSON shape
    #[error("{message}")]
    Serialization {
        message: String,
        #[source]
        cause: BoxError,
    },

    /// A deadline configured on the HTTP client elapsed
    #[error("{kind} timeout: {message}")]
    Timeout { message: String, kind: TimeoutKind },

    /// Anything not matched above
    #[error("{message}")]
    Unknown {
        message: String,
        #[source]
        cause: BoxError,
    },
}

/// Payload-less tag for [`ApiError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    HttpClient,
    HttpServer,
    Redirect,
    Network,
    Serialization,
    Timeout,
    Unknown,
}

impl ApiErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HttpClient => "http_client",
            Self::HttpServer => "http_server",
            Self::Redirect => "redirect",
            Self::Network => "network",
            Self::Serialization => "serialization",
            Self::Timeout => "timeout",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which deadline elapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeoutKind {
    /// Establishing the connection
    Connection,
    /// The request as a whole, before a response arrived
    Request,
    /// Reading the response body
    Socket,
}

impl fmt::Display for TimeoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Connection => "Connection",
            Self::Request => "Request",
            Self::Socket => "Socket",
        })
    }
}

impl ApiError {
    /// The variant tag
    #[must_use]
    pub const fn kind(&self) -> ApiErrorKind {
        match self {
            Self::HttpClient { .. } => ApiErrorKind::HttpClient,
            Self::HttpServer { .. } => ApiErrorKind::HttpServer,
            Self::Redirect { .. } => ApiErrorKind::Redirect,
            Self::Network { .. } => ApiErrorKind::Network,
            Self::Serialization { .. } => ApiErrorKind::Serialization,
            Self::Timeout { .. } => ApiErrorKind::Timeout,
            Self::Unknown { .. } => ApiErrorKind::Unknown,
        }
    }

    /// HTTP status, for the variants that carry one
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpClient { status_code, .. }
            | Self::HttpServer { status_code, .. }
            | Self::Redirect { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Whether repeating the request might succeed
    ///
    /// A hint for callers; the client itself never retries.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::HttpServer { .. } | Self::Network { .. } | Self::Timeout { .. } => true,
            Self::HttpClient { status_code, .. } => matches!(*status_code, 408 | 429),
            _ => false,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::HttpClient { status_code: 404, .. })
    }
}

/// A request that was rejected before any I/O
#[derive(Debug, Error)]
pub enum RequestError {
    /// A required path parameter was empty
    #[error("Path parameter `{name}` must not be empty")]
    EmptySegment { name: &'static str },

    /// The configured base URL cannot have path segments appended
    #[error("Base URL cannot carry a path: {0}")]
    CannotBeBase(String),
}

/// A status code that no classification rule covers
#[derive(Debug, Error)]
#[error("Unexpected HTTP status {0}")]
pub(crate) struct UnexpectedStatus(pub u16);

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    fn client_error(status_code: u16) -> ApiError {
        ApiError::HttpClient {
            status_code,
            message: "Client error".to_string(),
            body: None,
        }
    }

    #[test]
    fn retryable_errors() {
        assert!(
            ApiError::HttpServer {
                status_code: 503,
                message: "Service Unavailable".to_string(),
                body: None,
            }
            .is_retryable()
        );
        assert!(
            ApiError::Timeout {
                message: "slow".to_string(),
                kind: TimeoutKind::Request,
            }
            .is_retryable()
        );
        assert!(client_error(429).is_retryable());
        assert!(client_error(408).is_retryable());
    }

    #[test]
    fn non_retryable_errors() {
        assert!(!client_error(404).is_retryable());
        assert!(
            !ApiError::Serialization {
                message: "bad".to_string(),
                cause: "bad".into(),
            }
            .is_retryable()
        );
        assert!(
            !ApiError::Redirect {
                status_code: 301,
                message: "Moved Permanently".to_string(),
                location: None,
            }
            .is_retryable()
        );
    }

    #[test]
    fn not_found_and_status() {
        let err = client_error(404);
        assert!(err.is_not_found());
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.kind(), ApiErrorKind::HttpClient);
        assert!(!client_error(400).is_not_found());
    }

    #[test]
    fn error_display() {
        let err = ApiError::Timeout {
            message: "operation timed out".to_string(),
            kind: TimeoutKind::Connection,
        };
        assert_eq!(err.to_string(), "Connection timeout: operation timed out");
        assert_eq!(client_error(418).to_string(), "HTTP 418: Client error");
    }

    #[test]
    fn cause_is_exposed_as_source() {
        let err = ApiError::Unknown {
            message: "odd".to_string(),
            cause: Box::new(UnexpectedStatus(207)),
        };
        assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("Unexpected HTTP status 207"));
    }
}
