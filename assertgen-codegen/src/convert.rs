//! Describing loaded types for generation.

use assertgen_ir::{Accessor, TypeDef, TypeDescription};
use indexmap::IndexMap;
use thiserror::Error;

/// Turns a loaded type into the description a generator renders.
pub trait TypeConverter {
    fn convert(&self, def: &TypeDef) -> Result<TypeDescription, ConversionError>;
}

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("generic type '{name}<{}>' is not supported", .params.join(", "))]
    Generic { name: String, params: Vec<String> },

    #[error("field '{field}' is declared more than once on '{name}'")]
    DuplicateField { name: String, field: String },

    #[error("fields '{first}' and '{second}' of '{name}' both generate '{method}'")]
    MethodClash {
        name: String,
        method: String,
        first: String,
        second: String,
    },
}

/// Describes every field of a type as an accessor.
///
/// Rejects generic types, and field sets whose assertion methods would
/// collide (for instance the flags `active` and `is_active`).
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptionConverter;

impl TypeConverter for DescriptionConverter {
    fn convert(&self, def: &TypeDef) -> Result<TypeDescription, ConversionError> {
        let name = def.name.qualified();
        if def.is_generic() {
            return Err(ConversionError::Generic {
                name,
                params: def.type_params.clone(),
            });
        }

        let mut methods: IndexMap<String, &str> = IndexMap::new();
        let mut accessors = Vec::with_capacity(def.fields.len());
        for field in &def.fields {
            if accessors.iter().any(|a: &Accessor| a.field == field.name) {
                return Err(ConversionError::DuplicateField {
                    name,
                    field: field.name.clone(),
                });
            }

            let mut accessor = Accessor::new(&field.name, field.ty.clone());
            accessor.doc = field.doc.clone();
            for method in accessor.assertion_methods() {
                if let Some(first) = methods.get(&method) {
                    return Err(ConversionError::MethodClash {
                        name,
                        method,
                        first: first.to_string(),
                        second: field.name.clone(),
                    });
                }
                methods.insert(method, &field.name);
            }
            accessors.push(accessor);
        }

        Ok(TypeDescription {
            name: def.name.clone(),
            doc: def.doc.clone(),
            accessors,
        })
    }
}
