//! Check command report data structures.

use std::path::PathBuf;

use assertgen_ir::TypeDescription;
use serde::Serialize;

use super::output::{Output, Report};

/// Report data from manifest validation and type resolution.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Types that resolved and could be described, in resolution order.
    pub types: Vec<CheckedType>,
    /// Error messages, each with its causes joined by `: `.
    pub errors: Vec<String>,
}

/// A type that assertions would be generated for.
#[derive(Debug, Serialize)]
pub struct CheckedType {
    pub name: String,
    pub fields: usize,
    pub assertions: usize,
}

impl CheckedType {
    pub fn new(description: &TypeDescription) -> Self {
        Self {
            name: description.name.qualified(),
            fields: description.accessors.len(),
            assertions: description
                .accessors
                .iter()
                .map(|a| a.assertion_methods().len())
                .sum(),
        }
    }
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        if self.types.is_empty() {
            out.warning("no types matched the requested packages");
            return;
        }

        out.section(&format!(
            "{} type{} resolved",
            self.types.len(),
            if self.types.len() == 1 { "" } else { "s" }
        ));
        for ty in &self.types {
            out.list_item(&format!(
                "{} ({} field{}, {} assertion{})",
                ty.name,
                ty.fields,
                if ty.fields == 1 { "" } else { "s" },
                ty.assertions,
                if ty.assertions == 1 { "" } else { "s" },
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::CapturedOutput;

    fn report(types: Vec<CheckedType>, errors: Vec<String>) -> CheckReport {
        CheckReport {
            config_path: PathBuf::from("assertgen.toml"),
            types,
            errors,
        }
    }

    #[test]
    fn test_render_valid() {
        let report = report(
            vec![CheckedType {
                name: "p1.Employee".into(),
                fields: 2,
                assertions: 1,
            }],
            Vec::new(),
        );

        assert_eq!(
            CapturedOutput::render(&report),
            [
                "✓ assertgen.toml is valid",
                "",
                "1 type resolved:",
                "  - p1.Employee (2 fields, 1 assertion)",
            ]
        );
    }

    #[test]
    fn test_render_errors_only() {
        let report = report(
            Vec::new(),
            vec!["failed to describe 'p1.Box': generic type 'p1.Box<T>' is not supported".into()],
        );

        assert!(!report.is_valid());
        assert_eq!(
            CapturedOutput::render(&report),
            ["error: failed to describe 'p1.Box': generic type 'p1.Box<T>' is not supported"]
        );
    }

    #[test]
    fn test_render_warns_when_nothing_matched() {
        let lines = CapturedOutput::render(&report(Vec::new(), Vec::new()));
        assert_eq!(lines.last().unwrap(), "warning: no types matched the requested packages");
    }
}
