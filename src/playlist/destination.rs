//! Playlist destinations

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use url::Url;

use crate::error::{Error, Result};
use crate::source::SourceLocation;

/// Target spelling for standard output
const STDOUT_TARGET: &str = "-";

/// Where a playlist is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
    /// A non-file URI; rejected before anything is fetched
    Unsupported(Url),
}

impl Destination {
    /// Derive the destination by appending `.<extension>` to the source path
    pub fn derive(source: &SourceLocation, extension: &str) -> Self {
        match source {
            SourceLocation::LocalFile(path) => {
                let mut name = OsString::from(path.as_os_str());
                name.push(".");
                name.push(extension);
                Self::File(PathBuf::from(name))
            }
            SourceLocation::Remote(url) => {
                let mut url = url.clone();
                let path = format!("{}.{}", url.path(), extension);
                url.set_path(&path);
                Self::Unsupported(url)
            }
        }
    }

    /// Parse an explicitly configured output target (`-` for stdout)
    pub fn from_target(target: &str) -> Result<Self> {
        match target.trim() {
            "" => {
                return Err(Error::io(
                    "Invalid output target",
                    std::io::Error::new(std::io::ErrorKind::InvalidInput, "output target is empty"),
                ));
            }
            STDOUT_TARGET => return Ok(Self::Stdout),
            _ => {}
        }

        Ok(match SourceLocation::parse(target)? {
            SourceLocation::LocalFile(path) => Self::File(path),
            SourceLocation::Remote(url) => Self::Unsupported(url),
        })
    }

    /// Resolve the destination for a run: explicit target wins over derivation
    pub fn resolve(source: &SourceLocation, target: Option<&str>, extension: &str) -> Result<Self> {
        match target {
            Some(target) => Self::from_target(target),
            None => Ok(Self::derive(source, extension)),
        }
    }

    /// Fail early if playlists cannot be written here
    pub fn ensure_writable(&self) -> Result<()> {
        match self {
            Self::Unsupported(url) => Err(Error::io(
                format!("Cannot write playlist to {}", url),
                std::io::Error::new(
                    std::io::ErrorKind::Unsupported,
                    format!(
                        "unsupported destination scheme {:?}, pass --output with a local path or '-'",
                        url.scheme()
                    ),
                ),
            )),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => write!(f, "standard output"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Unsupported(url) => write!(f, "{}", url),
        }
    }
}
