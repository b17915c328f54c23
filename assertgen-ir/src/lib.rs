//! Type model for assertgen.
//!
//! These types are shared by every stage of generation:
//!
//! ```text
//! catalog (TOML) → TypeDef (loaded) → TypeDescription (described) → codegen
//! ```
//!
//! The model is language-agnostic: a [`TypeName`] is a dotted, package
//! qualified name and a [`FieldType`] only knows a handful of primitive
//! shapes plus references to other catalog types.

mod definition;
mod description;
mod serde_helpers;
mod types;

pub use definition::{FieldDef, TypeDef};
pub use description::{Accessor, AccessorKind, TypeDescription};
pub use types::{FieldType, ParseError, TypeName, validate_package};
