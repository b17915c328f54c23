//! Loaded type definitions.

use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::{FieldType, TypeName};

/// A field declared on a catalog type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDef {
    pub name: String,
    pub ty: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            doc: None,
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// A type as loaded from a catalog, before it is described for generation.
///
/// Two definitions are equal when their qualified names are equal; the
/// field list does not take part in identity.
#[derive(Debug, Clone, Serialize)]
pub struct TypeDef {
    pub name: TypeName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub type_params: Vec<String>,
    pub fields: Vec<FieldDef>,
}

impl TypeDef {
    pub fn new(name: TypeName) -> Self {
        Self {
            name,
            doc: None,
            type_params: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn with_type_param(mut self, param: impl Into<String>) -> Self {
        self.type_params.push(param.into());
        self
    }

    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Whether the type declares generic parameters.
    pub fn is_generic(&self) -> bool {
        !self.type_params.is_empty()
    }
}

impl PartialEq for TypeDef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for TypeDef {}

impl Hash for TypeDef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn employee() -> TypeDef {
        TypeDef::new(TypeName::new("p1", "Employee"))
    }

    #[test]
    fn test_identity_is_qualified_name() {
        let bare = employee();
        let with_fields = employee()
            .with_doc("An employee")
            .with_field(FieldDef::new("name", FieldType::String));

        assert_eq!(bare, with_fields);

        let set: HashSet<TypeDef> = [bare, with_fields].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_same_simple_name_in_other_package_differs() {
        let other = TypeDef::new(TypeName::new("p2", "Employee"));
        assert_ne!(employee(), other);
    }

    #[test]
    fn test_is_generic() {
        assert!(!employee().is_generic());
        assert!(employee().with_type_param("T").is_generic());
    }
}
