use std::fmt;
use thiserror::Error;

/// The single domain error kind for "could not obtain requested data".
///
/// Network failures, non-success HTTP statuses, empty result sets where at
/// least one result was required, and malformed payloads all collapse into
/// this one type; finer distinctions belong to the transport layer and are
/// preserved only through the optional [`source`](std::error::Error::source).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct DataError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl DataError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The remote endpoint could not be reached at all.
    pub fn unreachable(what: impl fmt::Display, source: reqwest::Error) -> Self {
        Self::with_source(format!("Could not reach {what}."), source)
    }

    /// The remote endpoint answered with a non-success status.
    pub fn status(what: impl fmt::Display, status: reqwest::StatusCode) -> Self {
        Self::new(format!("{what} responded with {status}."))
    }

    /// The response body could not be decoded.
    pub fn decode(what: impl fmt::Display, source: reqwest::Error) -> Self {
        Self::with_source(format!("Could not decode {what} response."), source)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn message_is_displayed() {
        let err = DataError::new("Could not geocode location (30.04, 31.24).");
        assert_eq!(err.to_string(), "Could not geocode location (30.04, 31.24).");
        assert!(err.source().is_none());
    }

    #[test]
    fn source_is_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        let err = DataError::with_source("Could not reach weather API.", io);
        assert!(err.source().is_some());
    }
}
