//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target or as JSON.

mod check;
mod generate;
mod list;
mod output;

pub use check::{CheckReport, CheckedType};
pub use generate::GenerateReport;
pub use list::{ListReport, ListedType};
#[cfg(test)]
pub use output::CapturedOutput;
pub use output::{Format, Report, emit};
