//! Command-line interface definitions and parsing
//!
//! The application is interactive, so the command line only covers startup
//! concerns: an optional file to open right away, an explicit config file,
//! and where to write logs.
//!
//! # Examples
//!
//! ```
//! use textsift::cli::Cli;
//!
//! let cli = Cli::try_parse_args(["textsift", "notes.txt"]).unwrap();
//! assert_eq!(cli.file.as_deref(), Some(std::path::Path::new("notes.txt")));
//! ```

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "textsift")]
#[command(version)]
#[command(about = "View a text file and filter its lines by substring", long_about = None)]
pub struct Cli {
    /// File to load at startup (same as picking it with Ctrl+O)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Use this config file instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments of the current process
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse an explicit argument list
    ///
    /// # Errors
    ///
    /// Returns a clap error for unknown flags or missing values.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args)
    }
}
