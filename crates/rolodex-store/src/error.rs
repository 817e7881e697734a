use rolodex_types::ContactId;
use std::fmt;

/// Result type for rolodex-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the store layer
#[derive(Debug)]
pub enum Error {
    /// The backing file exists but does not hold a valid store
    Corrupt(serde_json::Error),

    /// Lookup of an id that is not in the book
    NotFound(ContactId),

    /// IO operation failed
    Io(std::io::Error),

    /// Store location could not be resolved
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Corrupt(err) => {
                write!(f, "The store contains invalid JSON. Details: {}", err)
            }
            Error::NotFound(id) => write!(f, "No contact with id {}", id),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Corrupt(err) => Some(err),
            Error::NotFound(_) => None,
            Error::Io(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Corrupt(err)
    }
}
