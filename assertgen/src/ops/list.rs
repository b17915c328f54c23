//! List operation - every type on the classpath.

use std::collections::BTreeMap;

use assertgen_manifest::{AssertgenToml, Result};

use crate::reports::{ListReport, ListedType};

/// Execute the list operation.
///
/// Scans the classpath eagerly, so a broken catalog entry is a manifest
/// error here rather than part of a report.
pub fn list(file: &AssertgenToml) -> Result<ListReport> {
    let catalog = file.classpath().scan()?;

    let mut packages: BTreeMap<String, Vec<ListedType>> = BTreeMap::new();
    for def in catalog.iter() {
        packages
            .entry(def.name.package().to_string())
            .or_default()
            .push(ListedType {
                name: def.name.name().to_string(),
                fields: def.fields.len(),
                origin: catalog.origin(&def.name).unwrap_or_default().to_string(),
            });
    }
    for types in packages.values_mut() {
        types.sort_by(|a, b| a.name.cmp(&b.name));
    }

    let report = ListReport { packages };
    tracing::debug!(types = report.type_count(), "listed classpath");
    Ok(report)
}
