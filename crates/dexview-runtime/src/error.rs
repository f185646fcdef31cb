use std::fmt;

/// Result type for dexview-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
///
/// Fetch failures during accumulator actions are not reported here; they are
/// stored on the accumulator and echoed through `LoadOutcome::Failed`.
#[derive(Debug)]
pub enum Error {
    /// Provider layer error
    Provider(dexview_providers::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Requested page lies beyond the last known page
    PageOutOfRange { index: usize, total_pages: usize },

    /// Action not valid in the current mode or state
    InvalidOperation(String),

    /// Record id is malformed or outside the known catalog
    NotFound(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Provider(err) => write!(f, "Provider error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::PageOutOfRange { index, total_pages } => write!(
                f,
                "Page {} is out of range: only {} page(s) available",
                index + 1,
                total_pages
            ),
            Error::InvalidOperation(msg) => write!(f, "Invalid operation: {}", msg),
            Error::NotFound(id) => write!(f, "Record not found: {}", id),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Provider(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_)
            | Error::PageOutOfRange { .. }
            | Error::InvalidOperation(_)
            | Error::NotFound(_) => None,
        }
    }
}

impl From<dexview_providers::Error> for Error {
    fn from(err: dexview_providers::Error) -> Self {
        Error::Provider(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
