//! M3U playlist generation

use crate::vault::VaultEntry;

/// File extension appended to the source path
pub const EXTENSION: &str = "m3u";

/// Which flavour of M3U to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaylistStyle {
    /// One URL per line, nothing else
    #[default]
    Plain,
    /// `#EXTM3U` header with an `#EXTINF` title line before each URL
    Extended,
}

/// Generate M3U playlist content, one entry per URL in input order
///
/// Every line ends with `\n`, so an empty plain playlist is an empty string.
pub fn render(entries: &[VaultEntry], style: PlaylistStyle) -> String {
    let mut content = String::new();
    if style == PlaylistStyle::Extended {
        content.push_str("#EXTM3U\n");
    }

    for entry in entries {
        if style == PlaylistStyle::Extended {
            content.push_str("#EXTINF:-1,");
            content.push_str(&single_line(&entry.description));
            content.push('\n');
        }
        content.push_str(&entry.url);
        content.push('\n');
    }
    content
}

fn single_line(text: &str) -> String {
    text.split(['\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
