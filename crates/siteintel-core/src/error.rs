//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Analysis Service Errors
    // ─────────────────────────────────────────────────────────────
    /// Transport failure or non-success HTTP status, normalized to the
    /// message that is shown to the user.
    #[error("{message}")]
    Api {
        status: Option<u16>,
        message: String,
    },

    #[error("Unexpected response from analysis service: {message}")]
    Decode { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    /// Error for a non-success HTTP status carrying the server's description.
    pub fn api_status(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Error for a request that never produced an HTTP response.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Api {
            status: None,
            message: format!("Network error: {}", message.into()),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    /// HTTP status of an API error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => *status,
            _ => None,
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Failures of a single request are scoped to that request and the user
    /// can retry from the same screen. Everything else points at the local
    /// setup (configuration, terminal, filesystem).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Api { .. } | Error::Decode { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_server_detail_verbatim() {
        let err = Error::api_status(401, "bad token");
        assert_eq!(err.to_string(), "bad token");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_network_error_has_no_status() {
        let err = Error::network("connection refused");
        assert_eq!(err.to_string(), "Network error: connection refused");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::api_status(503, "busy").is_recoverable());
        assert!(Error::network("timeout").is_recoverable());
        assert!(Error::decode("missing field").is_recoverable());
        assert!(!Error::config_invalid("unknown mode").is_recoverable());
        assert!(!Error::TerminalInit("no tty".into()).is_recoverable());
    }
}
