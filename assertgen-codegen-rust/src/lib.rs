//! Rust renderer for assertgen.
//!
//! [`RustAssertionGenerator`] turns type descriptions into fluent assertion
//! structs and an entry point module of `assert_that_*` constructors.

mod generator;
mod rust_file;
mod types;

pub mod ast;
pub mod files;
pub mod naming;

pub use ast::{Field, Fn, Impl, Param, Struct};
pub use generator::RustAssertionGenerator;
pub use rust_file::{RawCode, RustFile, Use};
