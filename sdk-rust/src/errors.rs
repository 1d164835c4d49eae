use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    /// The request to the image endpoint failed or the response body could
    /// not be read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request returned a non-2xx status code.
    #[error("Failed to fetch image: {0}")]
    Status(reqwest::StatusCode),
}

pub type FetchResult<T> = Result<T, FetchError>;

/// A failure surfaced by the platform share entry point.
///
/// `name` carries whatever classification the platform reports
/// (e.g. "AbortError", "NotAllowedError"); the harness never interprets it
/// beyond showing it to the operator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} (name: {name})")]
pub struct ShareError {
    pub name: String,
    pub message: String,
}

impl ShareError {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}
