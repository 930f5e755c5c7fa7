//! CLI module for vault-m3u

use clap::Parser;

pub mod commands;

#[derive(Parser, Debug)]
#[command(name = "vault-m3u", about = "Convert a vault JSON export into an M3U playlist")]
#[command(version, author)]
pub struct Cli {
    /// Path or URI of the vault JSON export (file://, http://, https:// or a plain path)
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Write the playlist here instead of next to the source ('-' for standard output)
    #[arg(short, long, env = "VAULT_M3U_OUTPUT", value_name = "TARGET")]
    pub output: Option<String>,

    /// Emit extended M3U with #EXTINF titles taken from entry descriptions
    #[arg(long)]
    pub extended: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}
