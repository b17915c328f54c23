//! Assertion generation for assertgen.
//!
//! A run goes through four steps, each behind its own seam:
//!
//! ```text
//! names ──resolve──> TypeDef ──TypeConverter──> TypeDescription ──AssertionGenerator──> files
//! ```
//!
//! [`Orchestrator`] drives them and always returns a [`GenerationReport`];
//! a failing step halts the run and is recorded in the report rather than
//! returned as an error.
//!
//! # Module Organization
//!
//! - [`builder`] - Line-oriented code building blocks for renderers
//! - [`resolve`] - Package and type name resolution against a [`TypeLoader`]
//! - [`convert`] - Turning loaded types into descriptions
//! - [`generator`] - The language-specific generator seam
//! - [`report`] - The outcome of a run
//! - [`testing`] - In-memory doubles (feature-gated)

pub mod builder;
pub mod convert;
mod error;
pub mod generator;
mod loader;
mod orchestrator;
pub mod report;
pub mod resolve;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use convert::{ConversionError, DescriptionConverter, TypeConverter};
pub use error::{BoxError, GenerationError, Step};
pub use generator::{AssertionGenerator, EntryPointPackage};
pub use loader::ClasspathLoader;
pub use orchestrator::{GenerationRequest, Orchestrator};
pub use report::GenerationReport;
pub use resolve::{LoaderError, ResolvedTypes, TypeLoader, TypeResolutionError, resolve};
