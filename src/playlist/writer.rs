//! Playlist output

use tokio::fs::File;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::debug;

use super::Destination;
use crate::error::{Error, Result};

/// Write rendered playlist content to its destination
///
/// Files are created or truncated. A failure part way through leaves the
/// file incomplete; the error is still returned.
pub async fn write_playlist(destination: &Destination, content: &str) -> Result<()> {
    match destination {
        Destination::Stdout => {
            let mut stdout = tokio::io::stdout();
            write_to(&mut stdout, content)
                .await
                .map_err(|e| Error::io("Failed to write playlist to standard output", e))?;
        }
        Destination::File(path) => {
            let mut file = File::create(path)
                .await
                .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;
            write_to(&mut file, content)
                .await
                .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;
        }
        Destination::Unsupported(_) => destination.ensure_writable()?,
    }

    debug!("Wrote {} bytes to {}", content.len(), destination);
    Ok(())
}

/// Write all of `content` and flush
pub async fn write_to<W>(writer: &mut W, content: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(content.as_bytes()).await?;
    writer.flush().await
}
