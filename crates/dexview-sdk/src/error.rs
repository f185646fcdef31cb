use dexview_types::ErrorInfo;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    NotFound(String),
    InvalidInput(String),
    /// A fetch failed; the message is what the view state shows
    Fetch(ErrorInfo),
    Runtime(dexview_runtime::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Error::Fetch(info) => write!(f, "Fetch failed: {}", info),
            Error::Runtime(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Runtime(err) => Some(err),
            _ => None,
        }
    }
}

impl From<dexview_runtime::Error> for Error {
    fn from(err: dexview_runtime::Error) -> Self {
        use dexview_runtime::Error as RuntimeError;
        match err {
            RuntimeError::NotFound(id) => Error::NotFound(format!("record {}", id)),
            RuntimeError::PageOutOfRange { .. } | RuntimeError::InvalidOperation(_) => {
                Error::InvalidInput(err.to_string())
            }
            other => Error::Runtime(other),
        }
    }
}

impl From<dexview_providers::Error> for Error {
    fn from(err: dexview_providers::Error) -> Self {
        Error::Runtime(err.into())
    }
}
