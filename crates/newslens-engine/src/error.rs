use std::fmt;

/// Result type for newslens-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the analysis layer
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Caller supplied a parameter outside its valid range
    InvalidArgument(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
