use std::error::Error as StdError;
use thiserror::Error;

/// Body returned by a single strategy attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Decoded response body
    pub body: String,
    /// HTTP status, when the strategy saw one
    pub status: Option<u16>,
}

/// Outcome of running the whole fallback chain once.
///
/// A `Failure` is terminal for the run: callers report it and stop, there is
/// no retry or backoff beyond the chain itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    Success {
        body: String,
        status_code: Option<u16>,
    },
    Failure {
        reason: String,
    },
}

impl FetchResult {
    /// Borrow the body of a successful fetch.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Success { body, .. } => Some(body),
            Self::Failure { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Why a single strategy attempt produced no body.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client for this strategy could not be constructed.
    #[error("{0}")]
    ClientUnavailable(String),

    /// Network, timeout, TLS or HTTP status failure.
    #[error(transparent)]
    Request(Box<dyn StdError + Send + Sync>),

    /// The request completed but the body was empty.
    #[error("empty response body")]
    NoContent,
}

impl FetchError {
    /// Wrap any error as a request-level failure.
    pub fn request<E>(err: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        Self::Request(err.into())
    }

    pub fn is_client_unavailable(&self) -> bool {
        matches!(self, Self::ClientUnavailable(_))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        Self::Request(Box::new(e))
    }
}
