//! Type catalogs: the `[types]` tables of a manifest or catalog file.

use assertgen_ir::{FieldDef, FieldType, TypeDef, TypeName};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::{Error, Result, error::SourceContext, manifest::ParseContext};

/// A type definition as written in TOML.
///
/// ```toml
/// [types."p1.Employee"]
/// description = "An employee"
///
/// [types."p1.Employee".fields]
/// name = "string"
/// manager = { type = "option<p1.Employee>", description = "Direct manager" }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeEntry {
    pub description: Option<String>,
    #[serde(default)]
    pub type_params: Vec<String>,
    #[serde(default)]
    pub fields: IndexMap<String, FieldEntry>,
}

/// A field as written in TOML: either just the type, or a table.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FieldEntry {
    Short(String),
    Full {
        #[serde(rename = "type")]
        ty: String,
        description: Option<String>,
    },
}

impl FieldEntry {
    pub fn ty(&self) -> &str {
        match self {
            FieldEntry::Short(ty) => ty,
            FieldEntry::Full { ty, .. } => ty,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            FieldEntry::Short(_) => None,
            FieldEntry::Full { description, .. } => description.as_deref(),
        }
    }
}

/// A standalone catalog file on the classpath. Only `[types]` is allowed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    #[serde(default)]
    pub types: IndexMap<String, TypeEntry>,
}

impl CatalogFile {
    /// Parse and validate a catalog file's content.
    pub fn parse(content: &str, filename: &str) -> Result<TypeCatalog> {
        let source = SourceContext::new(content, filename);
        let file: CatalogFile = toml::from_str(content).map_err(|e| source.parse_error(e))?;
        TypeCatalog::from_entries(&file.types, &ParseContext::new(content, filename))
    }
}

/// Validated type definitions, keyed by qualified name in declaration order.
///
/// Each definition remembers the file it came from so conflicting
/// definitions can be reported with both origins.
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    types: IndexMap<TypeName, (TypeDef, String)>,
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate raw entries into definitions.
    pub fn from_entries(
        entries: &IndexMap<String, TypeEntry>,
        ctx: &ParseContext<'_>,
    ) -> Result<Self> {
        let mut catalog = Self::new();
        for (key, entry) in entries {
            let def = lower_entry(key, entry, ctx)?;
            catalog.insert(def, ctx.filename())?;
        }
        Ok(catalog)
    }

    /// Add a definition, rejecting a second definition of the same type.
    pub fn insert(&mut self, def: TypeDef, origin: &str) -> Result<()> {
        if let Some((_, first)) = self.types.get(&def.name) {
            return Err(Box::new(Error::DuplicateType {
                name: def.name.qualified(),
                first: first.clone(),
                second: origin.to_string(),
            }));
        }
        self.types.insert(def.name.clone(), (def, origin.to_string()));
        Ok(())
    }

    /// Merge every definition of `other` into this catalog.
    pub fn merge(&mut self, other: TypeCatalog) -> Result<()> {
        for (_, (def, origin)) in other.types {
            self.insert(def, &origin)?;
        }
        Ok(())
    }

    pub fn get(&self, name: &TypeName) -> Option<&TypeDef> {
        self.types.get(name).map(|(def, _)| def)
    }

    /// File the definition of `name` was read from.
    pub fn origin(&self, name: &TypeName) -> Option<&str> {
        self.types.get(name).map(|(_, origin)| origin.as_str())
    }

    /// Definitions in `package` and its sub-packages, in declaration order.
    pub fn in_package<'a>(&'a self, package: &'a str) -> impl Iterator<Item = &'a TypeDef> {
        self.iter().filter(move |def| def.name.is_in_package(package))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeDef> {
        self.types.values().map(|(def, _)| def)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

fn lower_entry(key: &str, entry: &TypeEntry, ctx: &ParseContext<'_>) -> Result<TypeDef> {
    let source = ctx.source_context();
    let name = TypeName::parse(key).map_err(|e| {
        source.invalid_type_name_error(key, e.to_string(), ctx.find_key_span(key))
    })?;
    if !name.name().starts_with(char::is_uppercase) {
        return Err(source.invalid_type_name_error(
            key,
            "the simple name must start with an uppercase letter",
            ctx.find_key_span(key),
        ));
    }

    let type_ctx = ctx.push(key);
    validate_segments(&type_ctx, &name)?;
    let mut def = TypeDef::new(name);
    def.doc = entry.description.clone();
    def.type_params = entry.type_params.clone();

    for (field_name, field) in &entry.fields {
        type_ctx.validate_name(field_name, "field")?;

        let ty: FieldType = field.ty().parse().map_err(|_| {
            source.invalid_field_type_error(
                key,
                field_name,
                field.ty(),
                ctx.find_value_span(field.ty()),
            )
        })?;

        for referenced in ty.referenced_types() {
            validate_segments(&type_ctx.push(field_name), referenced)?;
        }

        let mut field_def = FieldDef::new(field_name, ty);
        field_def.doc = field.description().map(str::to_string);
        def.fields.push(field_def);
    }

    Ok(def)
}

/// Every segment of a type name becomes a Rust path segment, so none may
/// be a keyword.
fn validate_segments(ctx: &ParseContext<'_>, name: &TypeName) -> Result<()> {
    for segment in name.package_segments() {
        ctx.validate_name(segment, "package segment")?;
    }
    ctx.validate_name(name.name(), "type name")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<TypeCatalog> {
        CatalogFile::parse(content, "types.toml")
    }

    #[test]
    fn test_parse_short_and_full_fields() {
        let catalog = parse(
            r#"
            [types."p1.Employee"]
            description = "An employee"

            [types."p1.Employee".fields]
            name = "string"
            manager = { type = "option<p1.Employee>", description = "Direct manager" }
            "#,
        )
        .unwrap();

        let name = TypeName::parse("p1.Employee").unwrap();
        let def = catalog.get(&name).unwrap();
        assert_eq!(def.doc.as_deref(), Some("An employee"));
        assert_eq!(def.fields.len(), 2);
        assert_eq!(def.fields[0].name, "name");
        assert_eq!(def.fields[0].ty, FieldType::String);
        assert_eq!(def.fields[1].name, "manager");
        assert_eq!(def.fields[1].doc.as_deref(), Some("Direct manager"));
        assert_eq!(catalog.origin(&name), Some("types.toml"));
    }

    #[test]
    fn test_in_package_includes_sub_packages() {
        let catalog = parse(
            r#"
            [types."p2.Address"]
            [types."p2.geo.Point"]
            [types."p20.Other"]
            "#,
        )
        .unwrap();

        let names: Vec<String> = catalog.in_package("p2").map(|d| d.name.qualified()).collect();
        assert_eq!(names, ["p2.Address", "p2.geo.Point"]);
        assert_eq!(catalog.in_package("nope").count(), 0);
    }

    #[test]
    fn test_rejects_lowercase_type_name() {
        let err = parse("[types.\"p1.employee\"]\n").unwrap_err();
        assert!(matches!(*err, Error::InvalidTypeName { .. }));
    }

    #[test]
    fn test_rejects_malformed_type_name() {
        let err = parse("[types.\"p1..Employee\"]\n").unwrap_err();
        match *err {
            Error::InvalidTypeName { name, span, .. } => {
                assert_eq!(name, "p1..Employee");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_field_type() {
        let err = parse(
            r#"
            [types."p1.Employee".fields]
            id = "uuid"
            "#,
        )
        .unwrap_err();

        match *err {
            Error::InvalidFieldType { field, ty, span, .. } => {
                assert_eq!(field, "id");
                assert_eq!(ty, "uuid");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_keyword_field() {
        let err = parse(
            r#"
            [types."p1.Employee".fields]
            type = "string"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { .. }));
    }

    #[test]
    fn test_rejects_keyword_package_segment() {
        let err = parse("[types.\"p1.type.Foo\"]\n").unwrap_err();
        match *err {
            Error::ReservedKeyword { name, context, .. } => {
                assert_eq!(name, "type");
                assert_eq!(context, "package segment of 'p1.type.Foo'");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_keyword_in_referenced_type() {
        let err = parse(
            r#"
            [types."p1.Employee".fields]
            badge = "option<p1.mod.Badge>"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { name, .. } if name == "mod"));
    }

    #[test]
    fn test_rejects_keyword_type_name() {
        let err = parse("[types.\"p1.Self\"]\n").unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { name, .. } if name == "Self"));
    }

    #[test]
    fn test_rejects_unknown_sections() {
        let err = parse("[generate]\npackages = []\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_merge_rejects_duplicates() {
        let mut first = parse("[types.\"p1.Employee\"]\n").unwrap();
        let second = CatalogFile::parse("[types.\"p1.Employee\"]\n", "other.toml").unwrap();

        let err = first.merge(second).unwrap_err();
        match *err {
            Error::DuplicateType { name, first, second } => {
                assert_eq!(name, "p1.Employee");
                assert_eq!(first, "types.toml");
                assert_eq!(second, "other.toml");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
