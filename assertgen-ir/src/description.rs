//! Generation-ready type descriptions.

use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use serde::Serialize;

use crate::{FieldType, TypeName};

/// How an accessor is asserted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessorKind {
    /// A boolean property (`is_x` / `is_not_x`).
    Flag,
    /// A plain value compared for equality.
    Value,
    /// A list of values.
    Collection,
    /// A value that may be absent.
    Optional,
}

impl AccessorKind {
    /// Classify a field type.
    pub fn of(ty: &FieldType) -> Self {
        match ty {
            FieldType::Bool => AccessorKind::Flag,
            FieldType::List(_) => AccessorKind::Collection,
            FieldType::Optional(_) => AccessorKind::Optional,
            _ => AccessorKind::Value,
        }
    }
}

/// One assertable property of a described type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Accessor {
    /// Field name on the subject type.
    pub field: String,
    pub ty: FieldType,
    pub kind: AccessorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl Accessor {
    /// Describe `field` of the given type.
    pub fn new(field: impl Into<String>, ty: FieldType) -> Self {
        Self {
            field: field.into(),
            kind: AccessorKind::of(&ty),
            ty,
            doc: None,
        }
    }

    /// Names of the assertion methods generated for this accessor.
    ///
    /// A leading `is_` on a flag is dropped, so `is_active` yields
    /// `is_active` and `is_not_active` rather than `is_is_active`.
    pub fn assertion_methods(&self) -> Vec<String> {
        let field = &self.field;
        match self.kind {
            AccessorKind::Flag => {
                let base = field.strip_prefix("is_").unwrap_or(field);
                vec![format!("is_{base}"), format!("is_not_{base}")]
            }
            AccessorKind::Value => vec![format!("has_{field}")],
            AccessorKind::Collection => vec![
                format!("has_{field}"),
                format!("has_no_{field}"),
                format!("{field}_contains"),
            ],
            AccessorKind::Optional => vec![format!("has_{field}"), format!("has_no_{field}")],
        }
    }
}

/// The structural description a generator renders assertions from.
///
/// Identity, hashing and ordering follow the qualified type name only, so
/// describing the same type twice yields equal descriptions and sorted
/// collections of descriptions are ordered by qualified name.
#[derive(Debug, Clone, Serialize)]
pub struct TypeDescription {
    pub name: TypeName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    pub accessors: Vec<Accessor>,
}

impl TypeDescription {
    /// Named catalog types this description refers to, excluding itself.
    pub fn dependencies(&self) -> Vec<&TypeName> {
        let mut deps: Vec<&TypeName> = self
            .accessors
            .iter()
            .flat_map(|a| a.ty.referenced_types())
            .filter(|name| **name != self.name)
            .collect();
        deps.sort();
        deps.dedup();
        deps
    }
}

impl PartialEq for TypeDescription {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for TypeDescription {}

impl Hash for TypeDescription {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for TypeDescription {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeDescription {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn describe(qualified: &str, accessors: Vec<Accessor>) -> TypeDescription {
        TypeDescription {
            name: TypeName::parse(qualified).unwrap(),
            doc: None,
            accessors,
        }
    }

    fn accessor(field: &str, ty: &str) -> Accessor {
        Accessor::new(field, ty.parse().unwrap())
    }

    #[test]
    fn test_accessor_kind_of() {
        assert_eq!(AccessorKind::of(&FieldType::Bool), AccessorKind::Flag);
        assert_eq!(AccessorKind::of(&FieldType::Int), AccessorKind::Value);
        assert_eq!(
            AccessorKind::of(&"list<int>".parse().unwrap()),
            AccessorKind::Collection
        );
        assert_eq!(
            AccessorKind::of(&"option<int>".parse().unwrap()),
            AccessorKind::Optional
        );
    }

    #[test]
    fn test_assertion_methods() {
        assert_eq!(
            accessor("is_active", "bool").assertion_methods(),
            ["is_active", "is_not_active"]
        );
        assert_eq!(
            accessor("active", "bool").assertion_methods(),
            ["is_active", "is_not_active"]
        );
        assert_eq!(accessor("age", "int").assertion_methods(), ["has_age"]);
        assert_eq!(
            accessor("tags", "list<string>").assertion_methods(),
            ["has_tags", "has_no_tags", "tags_contains"]
        );
        assert_eq!(
            accessor("manager", "option<p1.Employee>").assertion_methods(),
            ["has_manager", "has_no_manager"]
        );
    }

    #[test]
    fn test_set_collapses_same_type() {
        let mut set = BTreeSet::new();
        set.insert(describe("p1.Employee", vec![]));
        set.insert(describe("p1.Employee", vec![accessor("name", "string")]));
        set.insert(describe("p2.Address", vec![]));

        let names: Vec<String> = set.iter().map(|d| d.name.qualified()).collect();
        assert_eq!(names, ["p1.Employee", "p2.Address"]);
    }

    #[test]
    fn test_dependencies_skip_self_and_primitives() {
        let desc = describe(
            "p1.Employee",
            vec![
                accessor("name", "string"),
                accessor("address", "p2.Address"),
                accessor("previous", "list<p2.Address>"),
                accessor("manager", "option<p1.Employee>"),
            ],
        );

        let deps: Vec<String> = desc.dependencies().iter().map(|n| n.qualified()).collect();
        assert_eq!(deps, ["p2.Address"]);
    }
}
