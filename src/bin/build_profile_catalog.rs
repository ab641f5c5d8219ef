//! Builds the consolidated vendor profile catalog for a portable archive.
//!
//! Usage:
//!   build-profile-catalog <portable_zip> <output_json>
//!
//! Scans `resources/profiles/*.json` inside the archive and writes a single
//! JSON document with global and per-vendor printer/filament/process lists.
//! The archive is never modified.

use anyhow::Result;
use clap::Parser;
use portable_overlay::catalog::{build_catalog, write_catalog};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "build-profile-catalog")]
#[command(about = "Index vendor profiles from a portable distribution archive")]
struct Cli {
    /// Portable distribution archive to scan.
    portable_zip: PathBuf,
    /// Destination path for the catalog JSON document.
    output_json: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let document = build_catalog(&cli.portable_zip)?;
    write_catalog(&document, &cli.output_json)?;
    Ok(())
}
