//! Regenerates the overlay's branding assets from a single logo image.
//!
//! Usage:
//!   generate-branding [--logo <path>] [--overlay-root <path>]
//!
//! Renders the fixed PNG/ICO/ICNS/SVG asset catalog under
//! `<overlay_root>/resources/images/` plus the bundle `Icon.icns`,
//! overwriting whatever a previous run left behind.

use anyhow::Result;
use clap::Parser;
use portable_overlay::branding::{Logo, generate_assets};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "generate-branding")]
#[command(about = "Generate branding replacement assets from a school logo")]
struct Cli {
    /// Input logo image path.
    #[arg(long, default_value = "branding/school-logo.png")]
    logo: PathBuf,
    /// Overlay root directory.
    #[arg(long, default_value = "configs/portable-overlay/root")]
    overlay_root: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let logo = Logo::load(&cli.logo)?;
    let images_root = generate_assets(&logo, &cli.overlay_root)?;
    println!("Generated branding assets in {}", images_root.display());
    Ok(())
}
