use std::fmt;

/// Result type for dexview-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types produced by record-store fetchers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Transport rejected the request, the store answered with a
    /// non-success status, or the body could not be decoded.
    /// `target` names the URL or reference that failed.
    NetworkFailure { target: String, reason: String },

    /// Caller violated the fetch contract (e.g. `limit == 0`)
    InvalidRequest(String),
}

impl Error {
    pub fn network(target: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::NetworkFailure {
            target: target.into(),
            reason: reason.into(),
        }
    }

    /// The URL or reference that failed, when the error concerns one.
    pub fn target(&self) -> Option<&str> {
        match self {
            Error::NetworkFailure { target, .. } => Some(target),
            Error::InvalidRequest(_) => None,
        }
    }

    pub fn is_network_failure(&self) -> bool {
        matches!(self, Error::NetworkFailure { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NetworkFailure { target, reason } => {
                write!(f, "Network failure fetching {}: {}", target, reason)
            }
            Error::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
