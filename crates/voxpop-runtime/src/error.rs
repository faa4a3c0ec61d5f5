use std::fmt;

use voxpop_client::ApiError;
use voxpop_engine::ExportError;
use voxpop_types::ValidationError;

/// Result type for voxpop-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the dashboard layer
#[derive(Debug)]
pub enum Error {
    /// Record store request failed
    Api(ApiError),

    /// Draft refused before any network call
    Validation(ValidationError),

    /// CSV rendering failed
    Export(ExportError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Api(err) => write!(f, "Record store error: {}", err),
            Error::Validation(err) => write!(f, "Invalid feedback: {}", err),
            Error::Export(err) => write!(f, "Export error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Api(err) => Some(err),
            Error::Validation(err) => Some(err),
            Error::Export(err) => Some(err),
        }
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err)
    }
}

impl From<ExportError> for Error {
    fn from(err: ExportError) -> Self {
        Error::Export(err)
    }
}
