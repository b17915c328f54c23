//! Rust spellings of catalog field types.

use std::collections::{HashMap, HashSet};

use assertgen_ir::{FieldType, TypeDescription, TypeName};

use crate::{Use, naming};

/// Renders field types for one generated file.
///
/// Named types are imported by simple name unless that name is already
/// taken in the file, in which case they are written as full paths.
#[derive(Debug, Default)]
pub struct TypeRenderer {
    idents: HashMap<TypeName, String>,
    uses: Vec<Use>,
}

impl TypeRenderer {
    /// Plan imports for a description: the subject first, then every type
    /// its accessors refer to.
    pub fn for_description(description: &TypeDescription) -> Self {
        let mut renderer = Self::default();
        let mut taken = HashSet::new();

        let subject = std::iter::once(&description.name);
        for name in subject.chain(description.dependencies()) {
            if taken.insert(name.name().to_string()) {
                renderer.idents.insert(name.clone(), name.name().to_string());
                renderer
                    .uses
                    .push(Use::new(naming::module_path(name)).symbol(name.name()));
            } else {
                renderer.idents.insert(name.clone(), naming::type_path(name));
            }
        }
        renderer
    }

    pub fn uses(&self) -> impl Iterator<Item = Use> + '_ {
        self.uses.iter().cloned()
    }

    /// How `name` is spelled in this file.
    pub fn ident(&self, name: &TypeName) -> String {
        self.idents
            .get(name)
            .cloned()
            .unwrap_or_else(|| naming::type_path(name))
    }

    /// The type as stored on the subject.
    pub fn owned(&self, ty: &FieldType) -> String {
        match ty {
            FieldType::Bool => "bool".to_string(),
            FieldType::Int => "i64".to_string(),
            FieldType::Float => "f64".to_string(),
            FieldType::String => "String".to_string(),
            FieldType::Path => "std::path::PathBuf".to_string(),
            FieldType::List(inner) => format!("Vec<{}>", self.owned(inner)),
            FieldType::Optional(inner) => format!("Option<{}>", self.owned(inner)),
            FieldType::Named(name) => self.ident(name),
        }
    }

    /// The type an assertion method takes an expected value as.
    pub fn param(&self, ty: &FieldType) -> String {
        match ty {
            FieldType::Bool | FieldType::Int | FieldType::Float => self.owned(ty),
            FieldType::String => "&str".to_string(),
            FieldType::Path => "&std::path::Path".to_string(),
            FieldType::List(inner) => format!("&[{}]", self.owned(inner)),
            FieldType::Optional(_) | FieldType::Named(_) => format!("&{}", self.owned(ty)),
        }
    }
}

/// Comparison of an owned value `actual` with an expected value `expected`
/// passed as [`TypeRenderer::param`].
pub fn equals(ty: &FieldType, actual: &str, expected: &str) -> String {
    match ty {
        FieldType::Optional(_) | FieldType::Named(_) => format!("{actual} == *{expected}"),
        _ => format!("{actual} == {expected}"),
    }
}
