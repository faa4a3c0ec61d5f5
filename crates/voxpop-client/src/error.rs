use std::fmt;

/// Result type for record store operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Error types surfaced by the record store client
#[derive(Debug)]
pub enum ApiError {
    /// Backend answered with a non-success status. The body is captured
    /// best-effort for diagnostics and may be absent.
    Transport { status: u16, body: Option<String> },
    /// The request never completed (connection refused, timeout, DNS).
    Network(reqwest::Error),
    /// Backend answered success but the body did not decode.
    Decode(serde_json::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport { status, body } => match body {
                Some(body) => write!(f, "backend returned status {}: {}", status, body),
                None => write!(f, "backend returned status {}", status),
            },
            ApiError::Network(err) => write!(f, "network error: {}", err),
            ApiError::Decode(err) => write!(f, "response decode error: {}", err),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport { .. } => None,
            ApiError::Network(err) => Some(err),
            ApiError::Decode(err) => Some(err),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err)
    }
}
