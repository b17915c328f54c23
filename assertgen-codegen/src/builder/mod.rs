//! Line-oriented building blocks for rendering source files.
//!
//! - [`CodeBuilder`] accumulates indented lines.
//! - [`CodeFragment`] is a composable piece of output.
//! - [`Renderable`] is implemented by anything that can produce fragments.

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
