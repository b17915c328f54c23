//! The seam between orchestration and a language-specific renderer.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use assertgen_ir::TypeDescription;
use eyre::Result;

/// Where the aggregate entry point goes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EntryPointPackage {
    /// Let the generator choose.
    #[default]
    Default,
    /// Place it in this package.
    Custom(String),
}

impl EntryPointPackage {
    /// Map an optional, possibly empty, package name. Empty means default.
    pub fn from_option(package: Option<&str>) -> Self {
        match package.map(str::trim) {
            Some(package) if !package.is_empty() => Self::Custom(package.to_string()),
            _ => Self::Default,
        }
    }

    pub fn custom(&self) -> Option<&str> {
        match self {
            Self::Default => None,
            Self::Custom(package) => Some(package),
        }
    }
}

/// Renders and writes assertion files for described types.
///
/// Implementations write under the directory last given to
/// [`set_output_dir`](Self::set_output_dir), overwriting existing files.
pub trait AssertionGenerator {
    fn set_output_dir(&mut self, dir: &Path);

    /// Write the assertion file for one type and return its path.
    fn generate_assertion(&self, description: &TypeDescription) -> Result<PathBuf>;

    /// Write the aggregate entry point for every description and return its
    /// path.
    fn generate_entry_point(
        &self,
        descriptions: &BTreeSet<TypeDescription>,
        package: &EntryPointPackage,
    ) -> Result<PathBuf>;
}

impl<G: AssertionGenerator + ?Sized> AssertionGenerator for Box<G> {
    fn set_output_dir(&mut self, dir: &Path) {
        (**self).set_output_dir(dir)
    }

    fn generate_assertion(&self, description: &TypeDescription) -> Result<PathBuf> {
        (**self).generate_assertion(description)
    }

    fn generate_entry_point(
        &self,
        descriptions: &BTreeSet<TypeDescription>,
        package: &EntryPointPackage,
    ) -> Result<PathBuf> {
        (**self).generate_entry_point(descriptions, package)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_point_package_from_option() {
        assert_eq!(EntryPointPackage::from_option(None), EntryPointPackage::Default);
        assert_eq!(EntryPointPackage::from_option(Some("")), EntryPointPackage::Default);
        assert_eq!(EntryPointPackage::from_option(Some("  ")), EntryPointPackage::Default);
        assert_eq!(
            EntryPointPackage::from_option(Some("org.acme")),
            EntryPointPackage::Custom("org.acme".to_string())
        );
    }

    #[test]
    fn test_custom() {
        assert_eq!(EntryPointPackage::Default.custom(), None);
        assert_eq!(
            EntryPointPackage::Custom("org.acme".into()).custom(),
            Some("org.acme")
        );
    }
}
