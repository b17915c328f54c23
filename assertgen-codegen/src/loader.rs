//! [`TypeLoader`] implementations over catalogs.

use std::cell::OnceCell;

use assertgen_ir::{TypeDef, TypeName};
use assertgen_manifest::{Classpath, TypeCatalog};

use crate::{LoaderError, TypeLoader};

impl TypeLoader for TypeCatalog {
    fn load_type(&self, name: &TypeName) -> Result<Option<TypeDef>, LoaderError> {
        Ok(self.get(name).cloned())
    }

    fn package_types(&self, package: &str) -> Result<Vec<TypeDef>, LoaderError> {
        Ok(self.in_package(package).cloned().collect())
    }
}

/// Loads types from a [`Classpath`], scanning its entries on first use.
///
/// A scan failure is returned to the caller that triggered it and is not
/// cached, so the next lookup scans again.
#[derive(Debug)]
pub struct ClasspathLoader {
    classpath: Classpath,
    catalog: OnceCell<TypeCatalog>,
}

impl ClasspathLoader {
    pub fn new(classpath: Classpath) -> Self {
        Self {
            classpath,
            catalog: OnceCell::new(),
        }
    }

    /// The scanned catalog.
    ///
    /// # Errors
    ///
    /// Fails when an entry cannot be read or parsed, or defines a type twice.
    pub fn catalog(&self) -> Result<&TypeCatalog, LoaderError> {
        if let Some(catalog) = self.catalog.get() {
            return Ok(catalog);
        }
        let scanned = self.classpath.scan().map_err(|e| -> LoaderError { e })?;
        tracing::debug!(types = scanned.len(), "scanned classpath");
        Ok(self.catalog.get_or_init(|| scanned))
    }
}

impl TypeLoader for ClasspathLoader {
    fn load_type(&self, name: &TypeName) -> Result<Option<TypeDef>, LoaderError> {
        self.catalog()?.load_type(name)
    }

    fn package_types(&self, package: &str) -> Result<Vec<TypeDef>, LoaderError> {
        self.catalog()?.package_types(package)
    }
}
