//! Vendor profile catalog wiring.
//!
//! A portable distribution archive ships one JSON profile bundle per vendor
//! under `resources/profiles/`. This module scans the archive, extracts the
//! printer/filament/process names each bundle declares, and assembles the
//! consolidated catalog document the distribution pipeline consumes. Callers
//! use [`build_catalog`] to produce the document and [`write_catalog`] to
//! serialize it.

pub mod document;
pub mod profile;
pub mod scan;

pub use document::{CatalogDocument, VendorSummary, build_catalog, write_catalog};
pub use profile::{HIDDEN_PROFILE_PREFIX, VendorProfile};
pub use scan::{open_archive, vendor_entries, vendor_id};

/// Path prefix inside the archive that holds vendor profile bundles.
pub const PROFILE_PREFIX: &str = "resources/profiles/";
