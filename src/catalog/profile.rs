//! Vendor profile bundles and name extraction.
//!
//! Bundles are consumed leniently: the three recognized lists may be absent,
//! and list items that are not objects or carry no usable `name` are skipped.
//! Only a document that fails to parse as JSON at all is fatal, and that is
//! surfaced by the caller with the archive entry name attached.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeSet;

/// Names carrying this prefix mark internal base profiles that the slicer
/// hides from its profile pickers; they never appear in the catalog.
pub const HIDDEN_PROFILE_PREFIX: &str = "fdm_";

/// The three profile lists a vendor bundle may declare. Everything else in
/// the bundle is irrelevant to the catalog and ignored.
#[derive(Debug, Default, Deserialize)]
pub struct VendorProfile {
    #[serde(default)]
    pub machine_model_list: Vec<Value>,
    #[serde(default)]
    pub filament_list: Vec<Value>,
    #[serde(default)]
    pub process_list: Vec<Value>,
}

impl VendorProfile {
    /// Printer model names. Hidden-prefix filtering does not apply here:
    /// printer models are never base profiles.
    pub fn printer_names(&self) -> BTreeSet<String> {
        collect_names(&self.machine_model_list, false)
    }

    /// Filament names, with hidden base profiles dropped.
    pub fn filament_names(&self) -> BTreeSet<String> {
        collect_names(&self.filament_list, true)
    }

    /// Process names, with hidden base profiles dropped.
    pub fn process_names(&self) -> BTreeSet<String> {
        collect_names(&self.process_list, true)
    }
}

fn collect_names(entries: &[Value], skip_hidden: bool) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for item in entries {
        let Some(name) = item.get("name").and_then(Value::as_str) else {
            continue;
        };
        if name.is_empty() {
            continue;
        }
        if skip_hidden && name.starts_with(HIDDEN_PROFILE_PREFIX) {
            continue;
        }
        names.insert(name.to_string());
    }
    names
}
