use thiserror::Error;

/// Single error channel for everything a request can go wrong with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// Network failure or rejected fetch promise
    #[error("{0}")]
    Transport(String),

    /// Failing HTTP status with an `error` field in the body
    #[error("{0}")]
    Api(String),

    /// Request body could not be serialized
    #[error("{0}")]
    Encode(String),
}

impl RequestError {
    pub fn message(&self) -> &str {
        match self {
            RequestError::Transport(msg) | RequestError::Api(msg) | RequestError::Encode(msg) => msg,
        }
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        RequestError::Encode(err.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    #[error("No page is served at {0}")]
    UnknownPath(String),
}
