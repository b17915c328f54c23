// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Parsing and validation of `assertgen.toml` and type catalog files.
//!
//! A project manifest holds the generation settings, inline type
//! definitions, and a list of extra catalog files. Together the inline
//! definitions and the catalog files form the [`Classpath`] that types are
//! resolved against.

mod catalog;
mod classpath;
mod error;
mod generate;
mod manifest;

pub use catalog::{CatalogFile, FieldEntry, TypeCatalog, TypeEntry};
pub use classpath::Classpath;
pub use error::{Error, Result};
pub use generate::GenerateConfig;
pub use manifest::{AssertgenToml, Manifest, ParseContext, is_rust_keyword};
