//! Error types for Sugerir operations.
//!
//! Provides error context for library consumers.

use std::fmt;

/// Main error type for Sugerir operations.
///
/// # Examples
///
/// ```
/// use sugerir::error::SugerirError;
///
/// let err = SugerirError::UnknownUser {
///     user_id: "U42".to_string(),
/// };
/// assert!(err.to_string().contains("U42"));
/// ```
#[derive(Debug)]
pub enum SugerirError {
    /// The requested target user has no ratings in the store.
    UnknownUser {
        /// Requested user id
        user_id: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for SugerirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SugerirError::UnknownUser { user_id } => {
                write!(f, "Unknown user '{user_id}': no ratings in store")
            }
            SugerirError::Io(e) => write!(f, "I/O error: {e}"),
            SugerirError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for SugerirError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SugerirError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SugerirError {
    fn from(err: std::io::Error) -> Self {
        SugerirError::Io(err)
    }
}

impl From<&str> for SugerirError {
    fn from(msg: &str) -> Self {
        SugerirError::Other(msg.to_string())
    }
}

impl From<String> for SugerirError {
    fn from(msg: String) -> Self {
        SugerirError::Other(msg)
    }
}

impl SugerirError {
    /// Create an unknown-user error.
    #[must_use]
    pub fn unknown_user(user_id: &str) -> Self {
        Self::UnknownUser {
            user_id: user_id.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, SugerirError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_user_display() {
        let err = SugerirError::unknown_user("U99");
        let msg = err.to_string();
        assert!(msg.contains("Unknown user"));
        assert!(msg.contains("U99"));
    }

    #[test]
    fn test_io_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = SugerirError::Io(io_err);
        let msg = err.to_string();
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_from_str() {
        let err: SugerirError = "test error".into();
        assert!(matches!(err, SugerirError::Other(_)));
        assert_eq!(err.to_string(), "test error");
    }

    #[test]
    fn test_from_string() {
        let err: SugerirError = "test error".to_string().into();
        assert!(matches!(err, SugerirError::Other(_)));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: SugerirError = io_err.into();
        assert!(matches!(err, SugerirError::Io(_)));
    }

    #[test]
    fn test_error_source_io() {
        use std::error::Error;
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = SugerirError::Io(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_source_other() {
        use std::error::Error;
        let err = SugerirError::Other("test".to_string());
        assert!(err.source().is_none());
    }
}
