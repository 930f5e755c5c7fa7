//! Playlist rendering and output

mod destination;
mod m3u;
mod writer;

pub use destination::Destination;
pub use m3u::{EXTENSION, PlaylistStyle, render};
pub use writer::write_playlist;
