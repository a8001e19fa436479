//! Mapping of raised faults onto [`ApiError`]

use crate::error::{ApiError, RequestError, TimeoutKind, UnexpectedStatus};

/// Something that went wrong while executing a request
#[derive(Debug)]
pub enum Fault {
    /// The server answered with a non-success status
    Status {
        status: u16,
        /// Canonical reason phrase, e.g. `Not Found`
        reason: String,
        body: Option<String>,
        location: Option<String>,
    },
    /// The HTTP stack failed (connect, timeout, body read, ...)
    Transport(reqwest::Error),
    /// A success body did not decode
    Decode(serde_json::Error),
    /// The request was rejected before being sent
    InvalidRequest(RequestError),
}

/// Classify a fault into exactly one [`ApiError`] variant
///
/// Status ranges come first, then decode failures, then transport
/// failures split into timeouts and network errors. Everything else is
/// [`ApiError::Unknown`].
#[must_use]
pub fn classify(fault: Fault) -> ApiError {
    match fault {
        Fault::Status {
            status,
            reason,
            body,
            location,
        } => classify_status(status, reason, body, location),
        Fault::Decode(e) => ApiError::Serialization {
            message: format!("Failed to parse server response: {e}"),
            cause: Box::new(e),
        },
        Fault::Transport(e) => classify_transport(e),
        Fault::InvalidRequest(e) => ApiError::Unknown {
            message: format!("Invalid request: {e}"),
            cause: Box::new(e),
        },
    }
}

fn classify_status(status: u16, reason: String, body: Option<String>, location: Option<String>) -> ApiError {
    match status {
        400..=499 => ApiError::HttpClient {
            status_code: status,
            message: reason,
            body,
        },
        500..=599 => ApiError::HttpServer {
            status_code: status,
            message: reason,
            body,
        },
        300..=399 => ApiError::Redirect {
            status_code: status,
            message: reason,
            location,
        },
        _ => ApiError::Unknown {
            message: format!("Unexpected HTTP status {status} {reason}"),
            cause: Box::new(UnexpectedStatus(status)),
        },
    }
}

fn classify_transport(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        let kind = if e.is_connect() {
            TimeoutKind::Connection
        } else if e.is_body() {
            TimeoutKind::Socket
        } else {
            TimeoutKind::Request
        };
        return ApiError::Timeout {
            message: e.to_string(),
            kind,
        };
    }

    if e.is_decode() {
        return ApiError::Serialization {
            message: format!("Failed to parse server response: {e}"),
            cause: Box::new(e),
        };
    }

    if let Some(status) = e.status() {
        let reason = status.canonical_reason().unwrap_or_default().to_string();
        return classify_status(status.as_u16(), reason, None, None);
    }

    if e.is_connect() || e.is_request() || e.is_body() || e.is_redirect() {
        return ApiError::Network {
            message: e.to_string(),
            cause: Box::new(e),
        };
    }

    ApiError::Unknown {
        message: e.to_string(),
        cause: Box::new(e),
    }
}
