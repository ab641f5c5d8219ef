#![allow(dead_code)]

// Shared fixtures: portable-style archive construction and synthetic logos.

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Writes an archive containing the given `(entry_name, contents)` pairs
/// verbatim.
pub fn write_archive(path: &Path, entries: &[(&str, &str)]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = ZipWriter::new(file);
    for (name, contents) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .with_context(|| format!("starting archive entry {name}"))?;
        writer
            .write_all(contents.as_bytes())
            .with_context(|| format!("writing archive entry {name}"))?;
    }
    writer.finish().context("finishing archive")?;
    Ok(())
}

/// A `width`x`height` logo with a fully transparent border of the given
/// thickness around an opaque red core. Useful for crop and compositing
/// assertions.
pub fn bordered_logo(width: u32, height: u32, border: u32) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
    for y in border..height - border {
        for x in border..width - border {
            image.put_pixel(x, y, Rgba([200, 40, 40, 255]));
        }
    }
    image
}

/// Writes [`bordered_logo`] as a PNG for CLI-level tests.
pub fn write_logo_png(path: &Path, width: u32, height: u32, border: u32) -> Result<()> {
    bordered_logo(width, height, border)
        .save(path)
        .with_context(|| format!("writing logo fixture {}", path.display()))
}

/// A two-vendor archive exercising the hidden-prefix rules: `fdm_` filament
/// and process names must be dropped while the `fdm_` printer name survives.
pub fn two_vendor_archive(path: &Path) -> Result<()> {
    write_archive(
        path,
        &[
            (
                "resources/profiles/AVendor.json",
                r#"{
                    "machine_model_list": [{"name": "A-One"}, {"name": "fdm_machine_common"}],
                    "filament_list": [{"name": "fdm_hidden"}, {"name": "PLA"}],
                    "process_list": [{"name": "fdm_process_common"}, {"name": "0.20mm Standard"}]
                }"#,
            ),
            (
                "resources/profiles/BVendor.json",
                r#"{
                    "machine_model_list": [{"name": "B-Max"}],
                    "filament_list": [{"name": "PLA"}, {"name": "ABS"}],
                    "process_list": [{"name": "0.12mm Fine"}]
                }"#,
            ),
            ("resources/profiles/AVendor/machine.json", r#"{"name": "nested, ignored"}"#),
            ("resources/profiles/notes.txt", "not a profile"),
            ("resources/other/CVendor.json", r#"{"filament_list": [{"name": "ignored"}]}"#),
        ],
    )
}
