//! Opening a source location for reading

use std::path::{Path, PathBuf};

use bytes::Bytes;
use reqwest::{Client, Response};
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::debug;
use url::Url;

use super::SourceLocation;
use crate::error::{Error, Result};

/// An opened input, released when dropped
pub enum SourceStream {
    File { path: PathBuf, file: File },
    Remote { url: Url, response: Response },
}

/// Open a source location for reading
///
/// Local files are opened directly. Every other scheme goes through a plain
/// HTTP GET; a non-success status is reported as a network failure.
pub async fn open(location: &SourceLocation) -> Result<SourceStream> {
    match location {
        SourceLocation::LocalFile(path) => open_file(path).await,
        SourceLocation::Remote(url) => fetch(url).await,
    }
}

async fn open_file(path: &Path) -> Result<SourceStream> {
    debug!("Opening local file: {}", path.display());

    let file = File::open(path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        _ => Error::io(format!("Failed to open {}", path.display()), e),
    })?;

    Ok(SourceStream::File {
        path: path.to_path_buf(),
        file,
    })
}

async fn fetch(url: &Url) -> Result<SourceStream> {
    let network_error = |source| Error::Network {
        url: url.to_string(),
        source,
    };

    let client = Client::builder()
        .user_agent(concat!("vault-m3u/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(network_error)?;

    debug!("Fetching: {}", url);

    let response = client
        .get(url.clone())
        .send()
        .await
        .and_then(Response::error_for_status)
        .map_err(network_error)?;

    debug!("Fetched {} (status {})", url, response.status());

    Ok(SourceStream::Remote {
        url: url.clone(),
        response,
    })
}

impl SourceStream {
    /// Read the whole stream into memory
    pub async fn read_all(self) -> Result<Bytes> {
        let bytes = match self {
            Self::File { path, mut file } => {
                let mut buf = Vec::new();
                file.read_to_end(&mut buf)
                    .await
                    .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;
                Bytes::from(buf)
            }
            Self::Remote { url, response } => {
                response.bytes().await.map_err(|source| Error::Network {
                    url: url.to_string(),
                    source,
                })?
            }
        };

        debug!("Read {} bytes", bytes.len());
        Ok(bytes)
    }
}
