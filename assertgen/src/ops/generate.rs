//! Generate operation - assertion files for the requested types.

use assertgen_codegen::{ClasspathLoader, GenerationRequest, Orchestrator};
use assertgen_codegen_rust::RustAssertionGenerator;
use assertgen_manifest::AssertgenToml;

use crate::reports::GenerateReport;

/// Execute the generate operation.
///
/// Never fails: classpath and generation problems are recorded in the
/// report so the caller decides how to surface them.
pub fn generate(file: &AssertgenToml, request: &GenerationRequest) -> GenerateReport {
    let loader = ClasspathLoader::new(file.classpath());
    let mut orchestrator = Orchestrator::new(loader, RustAssertionGenerator::new());
    GenerateReport::new(file.path(), orchestrator.generate(request))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use assertgen_codegen::Step;
    use tempfile::TempDir;

    use super::*;

    const MANIFEST: &str = r#"
classpath = ["types/geo.toml"]

[types."p1.Employee".fields]
name = "string"
active = "bool"
address = "p2.Address"
"#;

    fn project(catalog: Option<&str>) -> (TempDir, AssertgenToml) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("assertgen.toml");
        fs::write(&path, MANIFEST).unwrap();
        if let Some(catalog) = catalog {
            fs::create_dir_all(temp.path().join("types")).unwrap();
            fs::write(temp.path().join("types/geo.toml"), catalog).unwrap();
        }
        let file = AssertgenToml::open(&path).unwrap();
        (temp, file)
    }

    #[test]
    fn test_generates_from_inline_and_catalog_types() {
        let (temp, file) = project(Some("[types.\"p2.Address\".fields]\ncity = \"string\"\n"));
        let out = temp.path().join("out");
        let request = GenerationRequest::new(&out)
            .with_package("p1")
            .with_type("p2.Address");

        let report = generate(&file, &request);

        assert!(report.is_success(), "{:?}", report.run.error());
        assert!(out.join("p1/employee_assert.rs").is_file());
        assert!(out.join("p2/address_assert.rs").is_file());
        assert!(out.join("assertions.rs").is_file());
        assert_eq!(report.run.generated_files().len(), 2);
    }

    #[test]
    fn test_missing_catalog_is_reported_as_resolution_failure() {
        let (temp, file) = project(None);
        let out = temp.path().join("out");

        let report = generate(&file, &GenerationRequest::new(&out).with_package("p1"));

        assert_eq!(report.run.failed_step(), Some(Step::Resolve));
        assert_eq!(report.run.generated_files().len(), 0);
        assert!(!out.exists());
    }
}
