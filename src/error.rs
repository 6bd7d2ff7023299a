//! Route client error types

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while requesting a route
#[derive(Debug, Error)]
pub enum RouteError {
    /// Connection to the routing service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// The service answered with a non-success HTTP status
    #[error("HTTP {status_code}: {body}")]
    Http {
        /// The HTTP status code returned by the service
        status_code: u16,
        /// The raw response body, passed through unparsed
        body: String,
    },

    /// Failed to parse a success response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid start or end location provided
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl RouteError {
    /// The HTTP status code, if this error carries one
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// The structured error envelope for transport and HTTP failures
    ///
    /// `status_code` is absent for transport-level failures that never
    /// received a response. Parse, location and configuration errors have
    /// no envelope.
    #[must_use]
    pub fn envelope(&self) -> Option<ErrorEnvelope> {
        match self {
            Self::Http { status_code, body } => Some(ErrorEnvelope {
                error: EnvelopeBody {
                    status_code: Some(*status_code),
                    body: body.clone(),
                },
            }),
            Self::ConnectionFailed(msg) => Some(ErrorEnvelope {
                error: EnvelopeBody {
                    status_code: None,
                    body: msg.clone(),
                },
            }),
            Self::Timeout { .. } => Some(ErrorEnvelope {
                error: EnvelopeBody {
                    status_code: None,
                    body: self.to_string(),
                },
            }),
            _ => None,
        }
    }
}

/// The `{"error": {"statusCode", "body"}}` shape delivered to callers on
/// any non-success outcome
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorEnvelope {
    /// The envelope payload
    pub error: EnvelopeBody,
}

/// Payload of an [`ErrorEnvelope`]
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeBody {
    /// HTTP status code, absent when the transport itself failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Raw response body or transport error description
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_envelope() {
        let err = RouteError::Http {
            status_code: 404,
            body: "Not Found".to_string(),
        };
        let envelope = err.envelope().unwrap();
        assert_eq!(envelope.error.status_code, Some(404));
        assert_eq!(envelope.error.body, "Not Found");
        assert_eq!(err.status_code(), Some(404));
    }

    #[test]
    fn test_transport_error_envelope_has_no_status() {
        let err = RouteError::ConnectionFailed("connection refused".to_string());
        let envelope = err.envelope().unwrap();
        assert_eq!(envelope.error.status_code, None);
        assert!(envelope.error.body.contains("connection refused"));
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_parse_error_has_no_envelope() {
        let err = RouteError::ParseError("unexpected token".to_string());
        assert!(err.envelope().is_none());
    }

    #[test]
    fn test_envelope_serialization_shape() {
        let err = RouteError::Http {
            status_code: 500,
            body: "boom".to_string(),
        };
        let json = serde_json::to_value(err.envelope().unwrap()).unwrap();
        assert_eq!(json["error"]["statusCode"], 500);
        assert_eq!(json["error"]["body"], "boom");
    }

    #[test]
    fn test_envelope_omits_absent_status() {
        let err = RouteError::Timeout { timeout_secs: 10 };
        let json = serde_json::to_value(err.envelope().unwrap()).unwrap();
        assert!(json["error"].get("statusCode").is_none());
    }

    #[test]
    fn test_error_display() {
        let err = RouteError::Timeout { timeout_secs: 10 };
        assert!(err.to_string().contains("10"));

        let err = RouteError::Http {
            status_code: 401,
            body: "invalid key".to_string(),
        };
        assert!(err.to_string().contains("401"));
    }
}
