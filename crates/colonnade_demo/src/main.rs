#![forbid(unsafe_code)]

//! # Colonnade Demo
//!
//! Terminal viewer for colonnade table documents.
//!
//! Reads a JSON document describing a title, column headers, and key-value
//! rows, binds it through [`colonnade::TableLoader`] onto an in-memory
//! surface, and renders the surface tree side by side. The interactive
//! mode re-runs the pipeline on 'r'; `--once` renders a single frame to
//! stdout for scripting and CI.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p colonnade_demo -- --source table.json
//! ```

mod app;
mod assets;
mod cli;
mod view;

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use colonnade::{MemorySurface, TableLoader};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(&cli);

    if cli.write_sample {
        write_sample(&cli.source)?;
    }

    let mut loader = TableLoader::new(&cli.source, MemorySurface::new());

    if cli.once {
        loader.initialize()?;
        println!("{}", view::render(loader.surface()));
        loader.teardown();
        return Ok(());
    }

    app::run(loader)
}

fn init_tracing(cli: &cli::Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Seeds the source path with the embedded sample document.
fn write_sample(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        anyhow::bail!("refusing to overwrite existing source: {}", path.display());
    }
    std::fs::write(path, assets::SAMPLE_DOCUMENT)
        .with_context(|| format!("failed to write sample to {}", path.display()))
}
