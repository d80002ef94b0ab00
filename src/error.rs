//! Error types for the scrollable text renderer

use thiserror::Error;

/// Result type alias for rendering operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or displaying markup
#[derive(Error, Debug)]
pub enum Error {
    /// The content had the wrong shape for the requested operation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The display sink could not accept the markup
    #[error("Display sink failed: {0}")]
    SinkError(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::SinkError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_become_sink_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io.into();
        assert!(matches!(err, Error::SinkError(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn invalid_argument_message() {
        let err = Error::InvalidArgument("Expected a string.".into());
        assert_eq!(err.to_string(), "Invalid argument: Expected a string.");
    }
}
