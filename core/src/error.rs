//! Error types for the content API client.
//!
//! # Design
//! Only the transport boundary fails. `Request` carries the human-readable
//! message shown in the error panel: the server's own `message` when it sent
//! one, otherwise a synthesized status line. Everything downstream of a
//! successful fetch (asset resolution, sanitizing, taxonomy, filtering) is
//! infallible and never produces an `ApiError`.

/// Errors surfaced by `ContentClient` and `ApiConfig`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Request { status: u16, message: String },

    /// The host transport could not complete the round-trip.
    #[error("network error: {0}")]
    Network(String),

    /// The cancellation signal fired before the response was handed over.
    #[error("request aborted")]
    Aborted,

    /// A 2xx body could not be shaped into the requested type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The configured base URL is unusable.
    #[error("config error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// HTTP status for `Request` errors, `None` for every other variant.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_error_displays_message_verbatim() {
        let err = ApiError::Request {
            status: 500,
            message: "Server exploded".to_string(),
        };
        assert_eq!(err.to_string(), "Server exploded");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn non_request_errors_have_no_status() {
        assert_eq!(ApiError::Aborted.status(), None);
        assert_eq!(ApiError::config("bad").to_string(), "config error: bad");
    }
}
