//! Catalog document assembly and serialization.

use crate::catalog::profile::VendorProfile;
use crate::catalog::scan::{open_archive, vendor_entries, vendor_id};
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Per-vendor slice of the catalog. Lists are deduplicated and sorted.
#[derive(Debug, Serialize)]
pub struct VendorSummary {
    pub printers: BTreeSet<String>,
    pub filaments: BTreeSet<String>,
    pub processes: BTreeSet<String>,
}

/// The consolidated catalog. The global lists are the union of every
/// vendor's lists, so each vendor list is a subset of its global
/// counterpart. Field order here is the output field order.
#[derive(Debug, Serialize)]
pub struct CatalogDocument {
    pub generated_at_utc: String,
    pub source_zip: String,
    pub printers: BTreeSet<String>,
    pub filaments: BTreeSet<String>,
    pub processes: BTreeSet<String>,
    pub vendors: BTreeMap<String, VendorSummary>,
}

/// Scans the archive and assembles the catalog document. A vendor bundle
/// that fails to parse aborts the whole run; there is no partial output.
pub fn build_catalog(zip_path: &Path) -> Result<CatalogDocument> {
    let mut archive = open_archive(zip_path)?;
    let entries = vendor_entries(&archive);

    let mut vendors = BTreeMap::new();
    let mut printers = BTreeSet::new();
    let mut filaments = BTreeSet::new();
    let mut processes = BTreeSet::new();

    for entry in entries {
        let reader = archive
            .by_name(&entry)
            .with_context(|| format!("opening archive entry {entry}"))?;
        let profile: VendorProfile = serde_json::from_reader(reader)
            .with_context(|| format!("parsing vendor profile {entry}"))?;

        let summary = VendorSummary {
            printers: profile.printer_names(),
            filaments: profile.filament_names(),
            processes: profile.process_names(),
        };
        printers.extend(summary.printers.iter().cloned());
        filaments.extend(summary.filaments.iter().cloned());
        processes.extend(summary.processes.iter().cloned());
        vendors.insert(vendor_id(&entry), summary);
    }

    Ok(CatalogDocument {
        generated_at_utc: Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        source_zip: source_name(zip_path),
        printers,
        filaments,
        processes,
        vendors,
    })
}

/// Writes the document as 2-space-indented JSON with a trailing newline.
pub fn write_catalog(document: &CatalogDocument, out_path: &Path) -> Result<()> {
    let mut out = File::create(out_path)
        .with_context(|| format!("creating {}", out_path.display()))?;
    serde_json::to_writer_pretty(&mut out, document)
        .with_context(|| format!("writing catalog to {}", out_path.display()))?;
    out.write_all(b"\n")
        .with_context(|| format!("writing catalog to {}", out_path.display()))?;
    Ok(())
}

fn source_name(zip_path: &Path) -> String {
    zip_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| zip_path.display().to_string())
}
