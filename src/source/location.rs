//! Parsed input locations

use std::fmt;
use std::path::PathBuf;

use tracing::debug;
use url::Url;

use crate::error::{Error, Result};

/// Where a vault export is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    /// A file on the local filesystem (bare path or `file://` URI)
    LocalFile(PathBuf),
    /// Anything with a non-file scheme, fetched over the network
    Remote(Url),
}

impl SourceLocation {
    /// Parse a path or URI given on the command line
    ///
    /// Text without a scheme is treated as a local path. Single-letter
    /// schemes are Windows drive letters, not URIs.
    pub fn parse(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Err(Error::malformed("empty source location"));
        }

        let location = match Url::parse(input) {
            Ok(url) if url.scheme().len() == 1 => Self::LocalFile(PathBuf::from(input)),
            Ok(url) if url.scheme() == "file" => {
                let path = url
                    .to_file_path()
                    .map_err(|_| Error::malformed(format!("not a local file URI: {}", input)))?;
                Self::LocalFile(path)
            }
            Ok(url) => Self::Remote(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => Self::LocalFile(PathBuf::from(input)),
            Err(e) => {
                return Err(Error::malformed(format!("invalid location {:?}: {}", input, e)));
            }
        };

        debug!("Resolved location {:?} to {}", input, location);
        Ok(location)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocalFile(path) => write!(f, "{}", path.display()),
            Self::Remote(url) => write!(f, "{}", url),
        }
    }
}
