//! Manifest parsing from files and strings.

use std::str::FromStr;

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, TypeCatalog, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "assertgen.toml")
    }
}

impl Manifest {
    /// Parse an assertgen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let mut manifest: Manifest =
        toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;

    let ctx = ParseContext::new(content, filename);
    validate_generate(&manifest, &ctx)?;
    manifest.catalog = TypeCatalog::from_entries(&manifest.types, &ctx)?;
    Ok(manifest)
}

/// Check the `[generate]` names are well-formed before anything runs.
fn validate_generate(manifest: &Manifest, ctx: &ParseContext<'_>) -> Result<()> {
    let source = ctx.source_context();
    let generate = &manifest.generate;

    for package in &generate.packages {
        if let Err(e) = assertgen_ir::validate_package(package) {
            return Err(source.validation_error(
                format!("invalid package '{}': {}", package, e),
                ctx.find_value_span(package),
            ));
        }
    }

    for ty in &generate.types {
        if let Err(e) = assertgen_ir::TypeName::parse(ty) {
            return Err(source.validation_error(
                format!("invalid type '{}': {}", ty, e),
                ctx.find_value_span(ty),
            ));
        }
    }

    // An empty entry point package means "let the generator decide".
    let entry_point = generate.entry_point_package.as_deref().unwrap_or_default();
    if !entry_point.is_empty() {
        if let Err(e) = assertgen_ir::validate_package(entry_point) {
            return Err(source.validation_error(
                format!("invalid entry point package '{}': {}", entry_point, e),
                ctx.find_value_span(entry_point),
            ));
        }
    }

    Ok(())
}
