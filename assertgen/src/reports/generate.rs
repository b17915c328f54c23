//! Generate command report data structures.

use std::path::{Path, PathBuf};

use assertgen_codegen::GenerationReport;
use serde::Serialize;

use super::output::{Output, Report};

/// Report data from one generation run.
#[derive(Debug, Serialize)]
pub struct GenerateReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// What the run produced, and where it stopped if it failed.
    #[serde(flatten)]
    pub run: GenerationReport,
}

impl GenerateReport {
    pub fn new(config_path: &Path, run: GenerationReport) -> Self {
        Self {
            config_path: config_path.to_path_buf(),
            run,
        }
    }

    pub fn is_success(&self) -> bool {
        self.run.is_success()
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        let count = self.run.generated_files().len();

        if count > 0 {
            // A run halted mid-way has no recorded output dir.
            let location = match self.run.output_dir() {
                Some(dir) => format!(" in {}", dir.display()),
                None => String::new(),
            };
            out.section(&format!(
                "Generated {} assertion file{}{}",
                count,
                if count == 1 { "" } else { "s" },
                location
            ));
            for file in self.run.generated_files() {
                out.added_item(&file.display().to_string());
            }
        }

        if let Some(entry_point) = self.run.entry_point_file() {
            out.key_value("Entry point", &entry_point.display().to_string());
        }

        if let Some(error) = self.run.error() {
            if count > 0 {
                out.newline();
            }
            let step = match error.type_name() {
                Some(name) => format!("{} ({})", error.step(), name),
                None => error.step().to_string(),
            };
            out.key_value("Generation halted at", &step);

            let chain = error.chain();
            if let Some((first, causes)) = chain.split_first() {
                out.error(first);
                for cause in causes {
                    out.cause(cause);
                }
            }
        } else if count == 0 {
            out.preformatted("No types matched; nothing was generated");
        }
    }
}

#[cfg(test)]
mod tests {
    use assertgen_codegen::{GenerationRequest, Orchestrator, testing::InMemoryLoader};
    use assertgen_codegen_rust::RustAssertionGenerator;
    use tempfile::TempDir;

    use super::*;
    use crate::reports::CapturedOutput;

    fn run(loader: InMemoryLoader, request: GenerationRequest) -> GenerateReport {
        let mut orchestrator = Orchestrator::new(loader, RustAssertionGenerator::new());
        GenerateReport::new(Path::new("assertgen.toml"), orchestrator.generate(&request))
    }

    #[test]
    fn test_render_success() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().display();
        let report = run(
            InMemoryLoader::new().with_type("p1.Employee"),
            GenerationRequest::new(temp.path()).with_package("p1"),
        );

        let lines = CapturedOutput::render(&report);
        assert_eq!(
            lines,
            [
                format!("Generated 1 assertion file in {out}:"),
                format!("  + {out}/p1/employee_assert.rs"),
                format!("Entry point: {out}/p1/assertions.rs"),
            ]
        );
    }

    #[test]
    fn test_render_nothing_matched() {
        let temp = TempDir::new().unwrap();
        let report = run(
            InMemoryLoader::new(),
            GenerationRequest::new(temp.path()).with_package("doesnotexist"),
        );

        assert_eq!(
            CapturedOutput::render(&report),
            ["No types matched; nothing was generated"]
        );
    }

    #[test]
    fn test_render_halted_run() {
        let temp = TempDir::new().unwrap();
        let report = run(
            InMemoryLoader::new(),
            GenerationRequest::new(temp.path()).with_type("p1.Nope"),
        );

        assert!(!report.is_success());
        assert_eq!(
            CapturedOutput::render(&report),
            [
                "Generation halted at: resolve",
                "error: failed to resolve the requested types",
                "  caused by: type 'p1.Nope' could not be found",
            ]
        );
    }

    #[test]
    fn test_render_run_halted_after_writing() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().display();
        let report = run(
            InMemoryLoader::new().with_type("p1.Foo").with_type("p1.FOO"),
            GenerationRequest::new(temp.path()).with_package("p1"),
        );

        assert_eq!(
            CapturedOutput::render(&report),
            [
                "Generated 1 assertion file:".to_string(),
                format!("  + {out}/p1/foo_assert.rs"),
                String::new(),
                "Generation halted at: generate assertion (p1.FOO)".to_string(),
                "error: failed to generate assertions for 'p1.FOO'".to_string(),
                "  caused by: 'p1/foo_assert.rs' would overwrite the assertions already generated for 'p1.Foo'"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_json_includes_config_and_run() {
        let temp = TempDir::new().unwrap();
        let report = run(
            InMemoryLoader::new(),
            GenerationRequest::new(temp.path()).with_type("p1.Nope"),
        );

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["config_path"], "assertgen.toml");
        assert_eq!(json["input_types"], serde_json::json!([]));
        assert_eq!(json["error"]["step"], "resolve");
    }
}
