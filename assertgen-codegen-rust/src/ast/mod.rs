//! Rust syntax builders rendered through [`Renderable`](assertgen_codegen::builder::Renderable).

mod fns;
mod impls;
mod structs;

pub use fns::{Fn, Param};
pub use impls::Impl;
pub use structs::{Field, Struct};
