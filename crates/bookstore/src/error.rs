//! Error types for bookstore

use std::fmt;
use std::io;

use crate::book::BookId;

/// Result type alias for bookstore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a store
///
/// Fetching an unknown id is not an error; see [`crate::Backend::fetch`].
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(io::Error),

    /// Malformed catalog
    Parse(String),

    /// The same id appears twice in one catalog
    DuplicateId(BookId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Parse(msg) => write!(f, "Parse error: {}", msg),
            Error::DuplicateId(id) => write!(f, "Duplicate book id: {}", id),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display() {
        assert_eq!(Error::DuplicateId(7).to_string(), "Duplicate book id: 7");
        assert_eq!(
            Error::Parse("line 3: expected year".to_string()).to_string(),
            "Parse error: line 3: expected year"
        );
    }

    #[test]
    fn test_io_source() {
        let err = Error::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert!(err.source().is_some());
        assert!(Error::DuplicateId(1).source().is_none());
    }
}
