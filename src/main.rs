//! vault-m3u - Convert a vault JSON export into an M3U playlist

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod error;
mod playlist;
mod source;
mod vault;

use cli::Cli;
use playlist::PlaylistStyle;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging on stderr; stdout may carry the playlist
    let filter = if cli.verbose {
        "vault_m3u=debug,reqwest=debug"
    } else {
        "vault_m3u=warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let style = if cli.extended {
        PlaylistStyle::Extended
    } else {
        PlaylistStyle::Plain
    };

    match cli::commands::convert(&cli.source, cli.output.as_deref(), style).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            let code = err
                .downcast_ref::<error::Error>()
                .map(|e| e.kind().exit_code())
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
