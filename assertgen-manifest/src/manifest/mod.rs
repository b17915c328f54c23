//! Manifest types and parsing for assertgen.toml files.

mod file;
mod parse;
mod validate;

use std::path::PathBuf;

pub use file::AssertgenToml;
use indexmap::IndexMap;
use serde::Deserialize;
pub use validate::{ParseContext, is_rust_keyword};

use crate::{GenerateConfig, TypeCatalog, TypeEntry};

/// Root manifest for assertgen.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Extra catalog files, relative to the manifest's directory.
    #[serde(default)]
    pub classpath: Vec<PathBuf>,

    /// Generation settings.
    #[serde(default)]
    pub generate: GenerateConfig,

    /// Raw inline type definitions.
    #[serde(default)]
    pub types: IndexMap<String, TypeEntry>,

    /// Validated inline type definitions.
    #[serde(skip)]
    pub catalog: TypeCatalog,
}
