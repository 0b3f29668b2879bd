//! Error types for the request helpers.
//!
//! # Design
//! HTTP error statuses are not errors here. A 404 or a 500 is a completed
//! exchange and is returned as a classified `Response`. Only a malformed
//! target, a failed round-trip, or an undecodable body produce an `Error`.

use thiserror::Error;

/// Boxed root cause carried by `Error::Transport`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by URL building, dispatch, and body decoding.
#[derive(Debug, Error)]
pub enum Error {
    /// The structured target descriptor cannot produce a URL.
    #[error("invalid target: {0}")]
    InvalidTarget(String),

    /// The underlying client failed before a status code was received
    /// (DNS failure, refused connection, timeout, I/O error).
    #[error("transport error for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    /// The response body could not be deserialized into the requested type.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    pub fn transport(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Error::Transport {
            url: url.into(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn transport_error_keeps_root_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = Error::transport("http://localhost:1", io);
        assert_eq!(
            err.to_string(),
            "transport error for http://localhost:1: refused"
        );
        assert_eq!(err.source().unwrap().to_string(), "refused");
    }

    #[test]
    fn invalid_target_message() {
        let err = Error::InvalidTarget("host is missing".to_string());
        assert_eq!(err.to_string(), "invalid target: host is missing");
    }
}
