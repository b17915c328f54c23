//! Core operations.
//!
//! This module contains the business logic for assertgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod list;

use std::path::Path;

use assertgen_codegen::{EntryPointPackage, GenerationRequest};
use assertgen_manifest::GenerateConfig;
pub use check::check;
use eyre::{Result, WrapErr, bail};
pub use generate::generate;
pub use list::list;

/// Command-line values layered over the manifest's `[generate]` section.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides<'a> {
    pub packages: &'a [String],
    pub types: &'a [String],
    pub output: Option<&'a Path>,
    pub entry_point_package: Option<&'a str>,
}

/// Build the request for one run.
///
/// A non-empty override list replaces the manifest's list instead of
/// extending it. An empty entry-point package selects the generator's
/// default package. Any other entry-point package must be a dotted name.
pub fn build_request(config: &GenerateConfig, overrides: &Overrides<'_>) -> Result<GenerationRequest> {
    let packages = pick(overrides.packages, &config.packages);
    let types = pick(overrides.types, &config.types);
    if packages.is_empty() && types.is_empty() {
        bail!("packages or types must be set to generate assertions");
    }

    let entry_point_package = EntryPointPackage::from_option(
        overrides
            .entry_point_package
            .or(config.entry_point_package.as_deref()),
    );
    if let Some(package) = entry_point_package.custom() {
        assertgen_ir::validate_package(package)
            .wrap_err_with(|| format!("invalid entry point package '{package}'"))?;
    }

    Ok(GenerationRequest {
        packages: packages.to_vec(),
        types: types.to_vec(),
        output_dir: overrides.output.unwrap_or(&config.output).to_path_buf(),
        entry_point_package,
    })
}

fn pick<'a>(cli: &'a [String], manifest: &'a [String]) -> &'a [String] {
    if cli.is_empty() { manifest } else { cli }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_manifest_values_are_used_without_overrides() {
        let config = GenerateConfig {
            packages: strings(&["p1"]),
            types: strings(&["p2.Address"]),
            output: PathBuf::from("out"),
            entry_point_package: Some("org.acme".into()),
        };

        let request = build_request(&config, &Overrides::default()).unwrap();

        assert_eq!(request.packages, ["p1"]);
        assert_eq!(request.types, ["p2.Address"]);
        assert_eq!(request.output_dir, PathBuf::from("out"));
        assert_eq!(
            request.entry_point_package,
            EntryPointPackage::Custom("org.acme".into())
        );
    }

    #[test]
    fn test_overrides_replace_manifest_lists() {
        let config = GenerateConfig {
            packages: strings(&["p1"]),
            types: strings(&["p2.Address"]),
            ..GenerateConfig::default()
        };
        let packages = vec!["p3".to_string()];

        let request = build_request(
            &config,
            &Overrides {
                packages: &packages,
                output: Some(Path::new("elsewhere")),
                ..Overrides::default()
            },
        )
        .unwrap();

        assert_eq!(request.packages, ["p3"]);
        assert_eq!(request.types, ["p2.Address"]);
        assert_eq!(request.output_dir, PathBuf::from("elsewhere"));
    }

    #[test]
    fn test_empty_entry_point_override_selects_default() {
        let config = GenerateConfig {
            packages: strings(&["p1"]),
            entry_point_package: Some("org.acme".into()),
            ..GenerateConfig::default()
        };

        let request = build_request(
            &config,
            &Overrides {
                entry_point_package: Some(""),
                ..Overrides::default()
            },
        )
        .unwrap();

        assert_eq!(request.entry_point_package, EntryPointPackage::Default);
    }

    #[test]
    fn test_path_like_entry_point_package_is_rejected() {
        let config = GenerateConfig {
            packages: strings(&["p1"]),
            ..GenerateConfig::default()
        };

        for package in ["../../../tmp/escaped", "org/acme", ".org"] {
            let err = build_request(
                &config,
                &Overrides {
                    entry_point_package: Some(package),
                    ..Overrides::default()
                },
            )
            .unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("invalid entry point package '{package}'")
            );
        }
    }

    #[test]
    fn test_manifest_entry_point_package_is_validated() {
        let config = GenerateConfig {
            packages: strings(&["p1"]),
            entry_point_package: Some("org.acme-tools".into()),
            ..GenerateConfig::default()
        };

        let err = build_request(&config, &Overrides::default()).unwrap_err();
        assert_eq!(
            format!("{:#}", err),
            "invalid entry point package 'org.acme-tools': 'org.acme-tools' has an invalid segment 'acme-tools'"
        );
    }

    #[test]
    fn test_nothing_requested_is_a_configuration_error() {
        let err = build_request(&GenerateConfig::default(), &Overrides::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "packages or types must be set to generate assertions"
        );
    }
}
