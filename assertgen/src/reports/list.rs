//! List command report data structures.

use std::collections::BTreeMap;

use serde::Serialize;

use super::output::{Output, Report};

/// Every type on the classpath, grouped by package.
#[derive(Debug, Default, Serialize)]
pub struct ListReport {
    /// Types keyed by dotted package; the root package is the empty string.
    pub packages: BTreeMap<String, Vec<ListedType>>,
}

#[derive(Debug, Serialize)]
pub struct ListedType {
    pub name: String,
    pub fields: usize,
    /// Catalog file the definition was read from.
    pub origin: String,
}

impl ListReport {
    pub fn type_count(&self) -> usize {
        self.packages.values().map(Vec::len).sum()
    }
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.packages.is_empty() {
            out.preformatted("No types on the classpath");
            return;
        }

        for (i, (package, types)) in self.packages.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(if package.is_empty() { "(root package)" } else { package });
            for ty in types {
                out.list_item(&format!("{} ({})", ty.name, ty.origin));
            }
        }
    }
}
