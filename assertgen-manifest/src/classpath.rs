//! The set of catalogs types are loaded from.

use std::path::{Path, PathBuf};

use crate::{CatalogFile, Error, Result, TypeCatalog};

/// Inline type definitions plus catalog entries on disk.
///
/// Entries are read on every [`scan`](Classpath::scan) rather than when the
/// classpath is built, so a missing or broken entry surfaces where the
/// types are actually needed. An entry is either a catalog file or a
/// directory whose `*.toml` files are all catalogs.
#[derive(Debug, Clone, Default)]
pub struct Classpath {
    inline: TypeCatalog,
    entries: Vec<PathBuf>,
}

impl Classpath {
    pub fn new(inline: TypeCatalog) -> Self {
        Self {
            inline,
            entries: Vec::new(),
        }
    }

    /// Add a catalog file or directory.
    pub fn with_entry(mut self, entry: impl Into<PathBuf>) -> Self {
        self.entries.push(entry.into());
        self
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// Read every entry and merge it with the inline definitions.
    ///
    /// # Errors
    ///
    /// Fails when an entry cannot be read or parsed, or when two catalogs
    /// define the same type.
    pub fn scan(&self) -> Result<TypeCatalog> {
        let mut catalog = self.inline.clone();
        for entry in &self.entries {
            for file in catalog_files(entry)? {
                let content = std::fs::read_to_string(&file).map_err(|e| Error::io(&file, e))?;
                let parsed = CatalogFile::parse(&content, &file.display().to_string())?;
                tracing::debug!(entry = %file.display(), types = parsed.len(), "scanned catalog");
                catalog.merge(parsed)?;
            }
        }
        Ok(catalog)
    }
}

fn catalog_files(entry: &Path) -> Result<Vec<PathBuf>> {
    if !entry.is_dir() {
        return Ok(vec![entry.to_path_buf()]);
    }

    let mut files = Vec::new();
    for dir_entry in std::fs::read_dir(entry).map_err(|e| Error::io(entry, e))? {
        let path = dir_entry.map_err(|e| Error::io(entry, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
