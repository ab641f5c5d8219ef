//! Archive scanning for vendor profile bundles.

use crate::catalog::PROFILE_PREFIX;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// Opens the portable archive for reading.
pub fn open_archive(path: &Path) -> Result<ZipArchive<File>> {
    let file =
        File::open(path).with_context(|| format!("opening archive {}", path.display()))?;
    ZipArchive::new(file).with_context(|| format!("reading archive {}", path.display()))
}

/// Entry names of the vendor bundles: direct children of
/// `resources/profiles/` ending in `.json`. Returned in lexicographic order
/// so catalog output is stable regardless of archive entry order.
pub fn vendor_entries<R: Read + Seek>(archive: &ZipArchive<R>) -> Vec<String> {
    let mut entries: Vec<String> = archive
        .file_names()
        .filter(|name| is_vendor_entry(name))
        .map(str::to_string)
        .collect();
    entries.sort();
    entries
}

/// Vendor identifier for an entry: its file name without the `.json`
/// extension.
pub fn vendor_id(entry: &str) -> String {
    let file_name = entry.rsplit('/').next().unwrap_or(entry);
    file_name.strip_suffix(".json").unwrap_or(file_name).to_string()
}

// Exactly two separators keeps direct children only; vendor bundles never
// nest, and the per-vendor subdirectories hold machine/filament data the
// catalog does not index.
fn is_vendor_entry(name: &str) -> bool {
    name.starts_with(PROFILE_PREFIX)
        && name.matches('/').count() == 2
        && name.ends_with(".json")
}
