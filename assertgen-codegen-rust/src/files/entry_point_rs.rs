use std::{
    collections::{BTreeSet, HashMap, HashSet},
    path::{Path, PathBuf},
};

use assertgen_core::{GENERATED_HEADER, GeneratedFile, package_to_path, to_snake_case};
use assertgen_ir::TypeDescription;

use crate::{Fn, Param, RawCode, RustFile, naming};

/// File name of the entry point inside its package directory.
pub const ENTRY_POINT_FILE: &str = "assertions.rs";

/// The entry point: declares every assertions module and offers one
/// `assert_that_<name>` constructor per type.
///
/// Modules are declared with `#[path]` relative to the entry point, so the
/// entry point can live in any package.
pub struct EntryPointRs<'a> {
    package: String,
    descriptions: &'a BTreeSet<TypeDescription>,
}

impl<'a> EntryPointRs<'a> {
    pub fn new(package: impl Into<String>, descriptions: &'a BTreeSet<TypeDescription>) -> Self {
        Self {
            package: package.into(),
            descriptions,
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Identifier stem per description: the snake-cased simple name, or the
    /// whole snake-cased qualified name when two types share a simple name.
    /// A stem that is still taken gets a numeric suffix.
    fn stems(&self) -> Vec<(&'a TypeDescription, String)> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for description in self.descriptions {
            *counts.entry(to_snake_case(description.name.name())).or_default() += 1;
        }

        let mut used = HashSet::new();
        self.descriptions
            .iter()
            .map(|description| {
                let name = &description.name;
                let simple = to_snake_case(name.name());
                let base = if counts[&simple] > 1 {
                    name.package_segments()
                        .map(to_snake_case)
                        .chain(std::iter::once(simple))
                        .collect::<Vec<_>>()
                        .join("_")
                } else {
                    simple
                };
                let mut stem = base.clone();
                let mut n = 2;
                while !used.insert(stem.clone()) {
                    stem = format!("{base}_{n}");
                    n += 1;
                }
                (description, stem)
            })
            .collect()
    }

    fn module_declarations(&self, stems: &[(&TypeDescription, String)]) -> RawCode {
        let from: Vec<&str> = self.package.split('.').filter(|s| !s.is_empty()).collect();
        let lines = stems.iter().flat_map(|(description, stem)| {
            let file = naming::assert_file_path(&description.name);
            let to: Vec<&str> = description
                .name
                .package_segments()
                .chain(file.file_name().and_then(|f| f.to_str()))
                .collect();
            [
                format!("#[path = \"{}\"]", naming::relative_path(&from, &to)),
                format!("pub mod {stem}_assert;"),
            ]
        });
        RawCode::lines(lines)
    }

    fn constructor(description: &TypeDescription, stem: &str) -> Fn {
        let name = &description.name;
        let assert_type = format!("{stem}_assert::{}", naming::assert_struct_name(name));
        Fn::new(format!("assert_that_{stem}"))
            .doc(format!("Start asserting on `{}`.", name.qualified()))
            .param(Param::new("actual", format!("&{}", naming::type_path(name))))
            .returns(format!("{assert_type}<'_>"))
            .body(format!("{assert_type}::new(actual)"))
    }
}

impl GeneratedFile for EntryPointRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(package_to_path(&self.package)).join(ENTRY_POINT_FILE)
    }

    fn render(&self) -> String {
        let stems = self.stems();
        RustFile::new()
            .add(self.module_declarations(&stems))
            .add_all(
                stems
                    .iter()
                    .map(|(description, stem)| Self::constructor(description, stem)),
            )
            .render_with_header(GENERATED_HEADER)
    }
}
