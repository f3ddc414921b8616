//! Command-line interface for `colonnade_demo`.
//!
//! # Examples
//!
//! ```bash
//! # Watch table.json in the current directory, refresh with 'r'
//! colonnade_demo
//!
//! # Render a specific document once and exit (CI-friendly)
//! colonnade_demo --source fixtures/report.json --once
//!
//! # Seed the source path with the embedded sample document first
//! colonnade_demo --write-sample
//! ```

use std::path::PathBuf;

use clap::Parser;

/// Terminal viewer for colonnade table documents.
///
/// Reads a JSON table description (title, column headers, key-value rows),
/// buckets the rows into columns, and renders them side by side. Press 'r'
/// to re-run the pipeline, 'q' to quit.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "colonnade_demo",
    author,
    version,
    about = "Terminal viewer for colonnade table documents"
)]
pub struct Cli {
    /// Path of the table document to load
    #[arg(long, short = 's', default_value = "table.json", env = "COLONNADE_SOURCE")]
    pub source: PathBuf,

    /// Render a single frame to stdout and exit (no terminal takeover)
    #[arg(long)]
    pub once: bool,

    /// Write the embedded sample document to the source path before loading
    ///
    /// Refuses to overwrite an existing file.
    #[arg(long)]
    pub write_sample: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Tracing directive for the chosen verbosity.
    #[must_use]
    pub const fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
