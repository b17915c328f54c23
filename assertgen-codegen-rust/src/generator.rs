use std::{
    cell::RefCell,
    collections::{BTreeSet, HashMap},
    path::{Path, PathBuf},
};

use assertgen_codegen::{AssertionGenerator, EntryPointPackage};
use assertgen_core::{GeneratedFile, common_package};
use assertgen_ir::{TypeDescription, validate_package};
use eyre::{Result, WrapErr, bail};

use crate::{
    files::{AssertRs, EntryPointRs},
    naming,
};

/// Writes Rust assertion modules.
///
/// Each type gets `<out>/<package path>/<snake name>_assert.rs`. The entry
/// point goes to `<out>/<package path>/assertions.rs`, where the package is
/// the requested one or else the longest package prefix shared by every
/// type.
///
/// File names are case-folded, so two types whose names differ only in case
/// would share a file. The second of them is rejected before anything is
/// written for it.
#[derive(Debug, Clone, Default)]
pub struct RustAssertionGenerator {
    output_dir: PathBuf,
    /// Assertion files written since the output dir was set, with the type
    /// each belongs to.
    written: RefCell<HashMap<PathBuf, String>>,
}

impl RustAssertionGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// The package the entry point goes to when none is requested.
    pub fn default_package(descriptions: &BTreeSet<TypeDescription>) -> String {
        common_package(descriptions.iter().map(|d| d.name.package()))
    }
}

impl AssertionGenerator for RustAssertionGenerator {
    fn set_output_dir(&mut self, dir: &Path) {
        self.output_dir = dir.to_path_buf();
        self.written.get_mut().clear();
    }

    fn generate_assertion(&self, description: &TypeDescription) -> Result<PathBuf> {
        let qualified = description.name.qualified();
        let file = naming::assert_file_path(&description.name);
        if let Some(owner) = self.written.borrow().get(&file).filter(|o| **o != qualified) {
            bail!(
                "'{}' would overwrite the assertions already generated for '{owner}'",
                file.display()
            );
        }

        let path = AssertRs::new(description)
            .write(&self.output_dir)
            .wrap_err_with(|| format!("failed to write assertions for '{qualified}'"))?;
        self.written.borrow_mut().insert(file, qualified);
        Ok(path)
    }

    fn generate_entry_point(
        &self,
        descriptions: &BTreeSet<TypeDescription>,
        package: &EntryPointPackage,
    ) -> Result<PathBuf> {
        let package = match package.custom() {
            Some(package) => {
                validate_package(package)
                    .wrap_err_with(|| format!("invalid entry point package '{package}'"))?;
                package.to_string()
            }
            None => Self::default_package(descriptions),
        };

        let mut files: HashMap<PathBuf, &TypeDescription> = HashMap::new();
        for description in descriptions {
            let file = naming::assert_file_path(&description.name);
            if let Some(other) = files.insert(file, description) {
                bail!(
                    "'{}' and '{}' map to the same assertions file",
                    other.name,
                    description.name
                );
            }
        }

        EntryPointRs::new(package, descriptions)
            .write(&self.output_dir)
            .wrap_err("failed to write the entry point")
    }
}
