//! Error types for the tournament service client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by tournament API operations.
///
/// There is no retry logic anywhere in this client; callers decide what a
/// failure means. The harness records every variant as a named request
/// failure and carries on.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level failure: connect, timeout, TLS, or a broken stream.
    #[error("{operation}: transport error: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a status code outside the expected set
    /// for this operation.
    #[error("{operation}: unexpected status {status}")]
    UnexpectedStatus {
        operation: &'static str,
        status: StatusCode,
    },

    /// Creation succeeded but the Location-style header carrying the new
    /// identifier was absent or not valid UTF-8.
    #[error("{operation}: response did not carry a location header")]
    MissingLocation { operation: &'static str },

    /// The response body could not be decoded as the expected JSON shape.
    #[error("{operation}: invalid response body: {source}")]
    InvalidBody {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl ClientError {
    /// True for failures that never reached the service.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport { .. })
    }

    /// The status code the service answered with, if it answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_status_exposes_the_code() {
        let err = ClientError::UnexpectedStatus {
            operation: "create team",
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!err.is_transport());
    }

    #[test]
    fn missing_location_has_no_status() {
        let err = ClientError::MissingLocation {
            operation: "create tournament",
        };
        assert_eq!(err.status(), None);
    }
}
