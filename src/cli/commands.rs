//! CLI command handlers

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::info;

use crate::playlist::{self, Destination, PlaylistStyle};
use crate::source::{self, SourceLocation};
use crate::vault;

/// Convert one vault export into a playlist
///
/// The destination is checked before the source is opened, and written only
/// after the whole export has parsed, so bad input never leaves a file behind.
pub async fn convert(input: &str, output: Option<&str>, style: PlaylistStyle) -> Result<()> {
    let location = SourceLocation::parse(input)?;
    let destination = Destination::resolve(&location, output, playlist::EXTENSION)?;
    destination.ensure_writable()?;

    info!("Converting {} -> {}", location, destination);

    let data = source::open(&location).await?.read_all().await?;
    let entries = vault::parse_entries(&data)
        .with_context(|| format!("Failed to read vault export {}", location))?;

    let content = playlist::render(&entries, style);
    playlist::write_playlist(&destination, &content).await?;

    info!("Wrote {} entries to {}", entries.len(), destination);
    if let Destination::File(path) = &destination {
        eprintln!(
            "{} {} entries to {}",
            "Wrote".green().bold(),
            entries.len(),
            path.display()
        );
    }

    Ok(())
}
