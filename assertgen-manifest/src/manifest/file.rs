use std::path::{Path, PathBuf};

use super::Manifest;
use crate::{Classpath, Error, Result};

/// An assertgen.toml file with both raw content and parsed manifest.
pub struct AssertgenToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl AssertgenToml {
    /// Open and parse an assertgen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory relative paths in the manifest are resolved against.
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new(""))
    }

    /// The classpath: inline types plus the manifest's catalog entries.
    pub fn classpath(&self) -> Classpath {
        let base = self.base_dir();
        self.manifest
            .classpath
            .iter()
            .fold(Classpath::new(self.manifest.catalog.clone()), |cp, entry| {
                cp.with_entry(base.join(entry))
            })
    }
}
