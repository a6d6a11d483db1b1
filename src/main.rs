//! Textsift application entry point
//!
//! Opens a full-screen viewer for a text file and filters its lines by a
//! literal substring.
//!
//! # Usage
//!
//! ```bash
//! # Start empty and pick a file with Ctrl+O
//! textsift
//!
//! # Open a file right away
//! textsift /var/log/syslog
//!
//! # Use another config file and log directory
//! textsift -c ./textsift.toml --log-dir /tmp/textsift notes.txt
//! ```
//!
//! # Configuration
//!
//! Settings are read from the user's config directory
//! (`~/.config/textsift/config.toml` on Linux) when the file exists.
//! Nothing is written there.

use colored::Colorize;
use std::process::ExitCode;
use textsift::{TextsiftError, cli::Cli, config::TextsiftConfig, logging, ui::App};
use tracing::{error, info};

type Result<T> = std::result::Result<T, TextsiftError>;

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => TextsiftConfig::load_from(path)?,
        None => TextsiftConfig::load()?,
    };

    let _guard = logging::init(cli.log_dir.as_deref(), config.log_level.as_deref());
    info!(version = env!("CARGO_PKG_VERSION"), file = ?cli.file, "textsift starting");

    let result = App::new(config).run(cli.file.as_deref());
    if let Err(e) = &result {
        error!(error = %e, "viewer stopped with an error");
    }
    result?;

    info!("textsift finished");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
