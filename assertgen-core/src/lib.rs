//! Core utilities and types for assertgen.
//!
//! This crate provides the file-writing primitives and naming helpers
//! shared by the generator crates.

mod file;
mod utils;

// File operations
pub use file::{GENERATED_HEADER, GeneratedFile, write_file};
// String utilities
pub use utils::{common_package, package_to_path, to_snake_case};
