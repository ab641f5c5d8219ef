//! Build tooling for a school-branded slicer portable distribution.
//!
//! Two independent command-line tools share this library. `build-profile-catalog`
//! scans a portable distribution archive for vendor profile bundles and emits a
//! consolidated JSON index of printers, filaments, and processes.
//! `generate-branding` renders a single school logo into the fixed set of
//! replacement icon assets the portable overlay ships.
//!
//! Both tools are single-pass build utilities invoked from the distribution
//! pipeline: any failure aborts the run with a non-zero exit.

pub mod branding;
pub mod catalog;

pub use branding::{Logo, generate_assets};
pub use catalog::{CatalogDocument, build_catalog, write_catalog};
