//! Check operation - resolve and describe types without writing anything.

use assertgen_codegen::{
    ClasspathLoader, DescriptionConverter, GenerationError, GenerationRequest, TypeConverter,
    resolve,
};
use assertgen_manifest::AssertgenToml;

use crate::reports::{CheckReport, CheckedType};

/// Execute the check operation.
///
/// Unlike a generation run, every type is described even after one fails,
/// so all conversion problems are reported at once.
pub fn check(file: &AssertgenToml, request: &GenerationRequest) -> CheckReport {
    let mut report = CheckReport {
        config_path: file.path().to_path_buf(),
        types: Vec::new(),
        errors: Vec::new(),
    };

    let loader = ClasspathLoader::new(file.classpath());
    let resolved = match resolve(&request.packages, &request.types, &loader) {
        Ok(resolved) => resolved,
        Err(e) => {
            report.errors.push(GenerationError::from(e).chain().join(": "));
            return report;
        }
    };

    let converter = DescriptionConverter;
    for def in resolved.iter() {
        match converter.convert(def) {
            Ok(description) => report.types.push(CheckedType::new(&description)),
            Err(source) => {
                let error = GenerationError::Conversion {
                    type_name: def.name.qualified(),
                    source,
                };
                report.errors.push(error.chain().join(": "));
            }
        }
    }

    tracing::debug!(
        types = report.types.len(),
        errors = report.errors.len(),
        "check finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn open(manifest: &str) -> (TempDir, AssertgenToml) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("assertgen.toml");
        fs::write(&path, manifest).unwrap();
        let file = AssertgenToml::open(&path).unwrap();
        (temp, file)
    }

    #[test]
    fn test_check_counts_fields_and_assertions() {
        let (temp, file) = open(
            r#"
[types."p1.Employee".fields]
name = "string"
active = "bool"
skills = "list<string>"
"#,
        );
        let out = temp.path().join("out");

        let report = check(&file, &GenerationRequest::new(&out).with_package("p1"));

        assert!(report.is_valid(), "{:?}", report.errors);
        assert_eq!(report.types.len(), 1);
        assert_eq!(report.types[0].name, "p1.Employee");
        assert_eq!(report.types[0].fields, 3);
        // has_name, is_active, is_not_active, has_skills, has_no_skills, skills_contains
        assert_eq!(report.types[0].assertions, 6);
        assert!(!out.exists());
    }

    #[test]
    fn test_check_reports_every_conversion_error() {
        let (temp, file) = open(
            r#"
[types."p1.Box"]
type_params = ["T"]

[types."p1.Pair"]
type_params = ["A", "B"]

[types."p1.Employee"]
"#,
        );

        let report = check(&file, &GenerationRequest::new(temp.path()).with_package("p1"));

        assert_eq!(report.errors.len(), 2);
        assert_eq!(
            report.errors[0],
            "failed to describe 'p1.Box': generic type 'p1.Box<T>' is not supported"
        );
        assert_eq!(report.types.len(), 1);
    }

    #[test]
    fn test_check_reports_unknown_type() {
        let (temp, file) = open("[types.\"p1.Employee\"]\n");

        let report = check(&file, &GenerationRequest::new(temp.path()).with_type("p1.Nope"));

        assert_eq!(
            report.errors,
            ["failed to resolve the requested types: type 'p1.Nope' could not be found"]
        );
    }
}
