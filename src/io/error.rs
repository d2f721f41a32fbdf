//! Error types for tile list operations and the terminal front end

use std::fmt;
use std::path::PathBuf;

/// Main error type for all domino operations
///
/// Malformed free-text remove requests are deliberately absent: they are
/// no-ops, not failures.
#[derive(Debug)]
pub enum DominoError {
    /// Argument rejected at the call boundary
    InvalidArgument {
        /// Name of the invalid argument
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Control name the front end does not recognise
    UnknownAction {
        /// The text that failed to parse
        input: String,
    },

    /// Tile list argument that could not be parsed
    InvalidTileList {
        /// The offending list text
        input: String,
        /// Description of what's wrong with it
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for DominoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid argument '{parameter}' = '{value}': {reason}")
            }
            Self::UnknownAction { input } => {
                write!(f, "Unknown action '{input}' (try 'help')")
            }
            Self::InvalidTileList { input, reason } => {
                write!(f, "Invalid tile list '{input}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for DominoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for domino results
pub type Result<T> = std::result::Result<T, DominoError>;

impl From<std::io::Error> for DominoError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid argument error
pub fn invalid_argument(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> DominoError {
    DominoError::InvalidArgument {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid tile list error
pub fn invalid_tile_list(input: &str, reason: &impl ToString) -> DominoError {
    DominoError::InvalidTileList {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error carrying the path it happened on
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> DominoError {
    DominoError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
