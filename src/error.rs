//! Error types for vault conversion

use std::path::PathBuf;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Broad category of a conversion failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Network,
    MalformedInput,
    Io,
}

impl ErrorKind {
    /// Process exit status for this kind of failure (sysexits.h values)
    pub fn exit_code(self) -> u8 {
        match self {
            Self::NotFound => 66,
            Self::Network => 69,
            Self::MalformedInput => 65,
            Self::Io => 74,
        }
    }
}

/// Errors that can occur while converting a vault export
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Local input file does not exist
    #[error("Input not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Remote fetch failed (connection, transport or non-success status)
    #[error("Failed to fetch {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Input is not a usable vault document
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Reading the input or writing the playlist failed
    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a malformed input error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    /// Wrap an I/O error with a short description of what was being done
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Network { .. } => ErrorKind::Network,
            Self::MalformedInput(_) => ErrorKind::MalformedInput,
            Self::Io { .. } => ErrorKind::Io,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedInput(err.to_string())
    }
}
