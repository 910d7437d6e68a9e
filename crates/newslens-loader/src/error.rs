use std::fmt;
use std::path::PathBuf;

/// Result type for newslens-loader operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading a dataset
#[derive(Debug)]
pub enum Error {
    /// Input path does not resolve to a readable file
    NotFound(PathBuf),

    /// Header row lacks a required column
    MissingColumn(String),

    /// CSV decoding failed (malformed row, invalid UTF-8, etc.)
    Csv(csv::Error),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(path) => write!(f, "File not found: {}", path.display()),
            Error::MissingColumn(name) => write!(f, "Missing required column: {}", name),
            Error::Csv(err) => write!(f, "CSV error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Csv(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::NotFound(_) | Error::MissingColumn(_) => None,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_includes_path() {
        let err = Error::NotFound(PathBuf::from("invalid_path_to_data.csv"));
        assert_eq!(err.to_string(), "File not found: invalid_path_to_data.csv");
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_io_error_has_source() {
        let err = Error::from(std::io::Error::other("disk on fire"));
        assert!(err.to_string().starts_with("IO error:"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
