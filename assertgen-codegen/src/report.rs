//! The outcome of a generation run.

use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::{GenerationError, Step};

/// What a run was asked to do, what it wrote, and how it ended.
///
/// Files are recorded as soon as they are written, so after a failed run
/// [`generated_files`](Self::generated_files) lists exactly the files that
/// exist. The requested inputs are only recorded once every per-type step
/// has succeeded.
#[derive(Debug, Default)]
pub struct GenerationReport {
    input_packages: Vec<String>,
    input_types: Vec<String>,
    output_dir: Option<PathBuf>,
    generated_files: IndexSet<PathBuf>,
    entry_point_file: Option<PathBuf>,
    error: Option<GenerationError>,
}

impl GenerationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_packages(&self) -> &[String] {
        &self.input_packages
    }

    pub fn input_types(&self) -> &[String] {
        &self.input_types
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    /// Per-type assertion files, in generation order.
    pub fn generated_files(&self) -> impl ExactSizeIterator<Item = &Path> {
        self.generated_files.iter().map(PathBuf::as_path)
    }

    pub fn entry_point_file(&self) -> Option<&Path> {
        self.entry_point_file.as_deref()
    }

    pub fn error(&self) -> Option<&GenerationError> {
        self.error.as_ref()
    }

    pub fn failed_step(&self) -> Option<Step> {
        self.error.as_ref().map(GenerationError::step)
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Every file written, per-type files first, then the entry point.
    pub fn all_files(&self) -> impl Iterator<Item = &Path> {
        self.generated_files().chain(self.entry_point_file())
    }

    pub(crate) fn record_inputs(&mut self, packages: &[String], types: &[String], output_dir: &Path) {
        self.input_packages = packages.to_vec();
        self.input_types = types.to_vec();
        self.output_dir = Some(output_dir.to_path_buf());
    }

    pub(crate) fn add_generated_file(&mut self, file: PathBuf) {
        self.generated_files.insert(file);
    }

    /// Record the entry point. Only the first call has an effect.
    pub(crate) fn set_entry_point_file(&mut self, file: PathBuf) {
        self.entry_point_file.get_or_insert(file);
    }

    /// Record the terminal error. Only the first call has an effect.
    pub(crate) fn set_error(&mut self, error: GenerationError) {
        self.error.get_or_insert(error);
    }
}

/// Serialized view used for machine-readable output.
impl Serialize for GenerationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct ErrorView<'a> {
            step: Step,
            #[serde(skip_serializing_if = "Option::is_none")]
            type_name: Option<&'a str>,
            messages: Vec<String>,
        }

        let error = self.error.as_ref().map(|e| ErrorView {
            step: e.step(),
            type_name: e.type_name(),
            messages: e.chain(),
        });

        let mut state = serializer.serialize_struct("GenerationReport", 6)?;
        state.serialize_field("input_packages", &self.input_packages)?;
        state.serialize_field("input_types", &self.input_types)?;
        state.serialize_field("output_dir", &self.output_dir)?;
        state.serialize_field("generated_files", &self.generated_files)?;
        state.serialize_field("entry_point_file", &self.entry_point_file)?;
        state.serialize_field("error", &error)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypeResolutionError;

    #[test]
    fn test_entry_point_and_error_are_set_once() {
        let mut report = GenerationReport::new();
        report.set_entry_point_file(PathBuf::from("out/assertions.rs"));
        report.set_entry_point_file(PathBuf::from("out/other.rs"));
        assert_eq!(report.entry_point_file(), Some(Path::new("out/assertions.rs")));

        report.set_error(TypeResolutionError::TypeNotFound("p1.A".into()).into());
        report.set_error(TypeResolutionError::TypeNotFound("p1.B".into()).into());
        let messages = report.error().unwrap().chain();
        assert_eq!(messages[1], "type 'p1.A' could not be found");
        assert_eq!(report.failed_step(), Some(Step::Resolve));
        assert!(!report.is_success());
    }

    #[test]
    fn test_all_files_lists_entry_point_last() {
        let mut report = GenerationReport::new();
        report.set_entry_point_file(PathBuf::from("out/assertions.rs"));
        report.add_generated_file(PathBuf::from("out/p1/employee_assert.rs"));
        report.add_generated_file(PathBuf::from("out/p2/address_assert.rs"));

        let files: Vec<&Path> = report.all_files().collect();
        assert_eq!(
            files,
            [
                Path::new("out/p1/employee_assert.rs"),
                Path::new("out/p2/address_assert.rs"),
                Path::new("out/assertions.rs"),
            ]
        );
    }

    #[test]
    fn test_serialize() {
        let mut report = GenerationReport::new();
        report.record_inputs(&["p1".to_string()], &[], Path::new("out"));
        report.add_generated_file(PathBuf::from("out/p1/employee_assert.rs"));
        report.set_error(GenerationError::EntryPoint {
            source: "disk full".into(),
        });

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "input_packages": ["p1"],
                "input_types": [],
                "output_dir": "out",
                "generated_files": ["out/p1/employee_assert.rs"],
                "entry_point_file": null,
                "error": {
                    "step": "generate_entry_point",
                    "messages": [
                        "failed to generate the assertions entry point",
                        "disk full",
                    ],
                },
            })
        );
    }
}
