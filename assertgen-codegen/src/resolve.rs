//! Expanding package and type names into the set of types to generate for.

use assertgen_ir::{ParseError, TypeDef, TypeName, validate_package};
use indexmap::IndexSet;
use thiserror::Error;

/// Error raised by a [`TypeLoader`] implementation.
pub type LoaderError = Box<dyn std::error::Error + Send + Sync>;

/// Looks types up by name on some source of definitions.
pub trait TypeLoader {
    /// Load one type, or `Ok(None)` when nothing by that name exists.
    fn load_type(&self, name: &TypeName) -> Result<Option<TypeDef>, LoaderError>;

    /// Every type in `package` and its sub-packages.
    ///
    /// An unknown package is not an error; it simply has no members.
    fn package_types(&self, package: &str) -> Result<Vec<TypeDef>, LoaderError>;
}

impl<T: TypeLoader + ?Sized> TypeLoader for &T {
    fn load_type(&self, name: &TypeName) -> Result<Option<TypeDef>, LoaderError> {
        (**self).load_type(name)
    }

    fn package_types(&self, package: &str) -> Result<Vec<TypeDef>, LoaderError> {
        (**self).package_types(package)
    }
}

#[derive(Debug, Error)]
pub enum TypeResolutionError {
    #[error("invalid {kind} name '{name}'")]
    InvalidName {
        kind: &'static str,
        name: String,
        #[source]
        source: ParseError,
    },

    #[error("type '{0}' could not be found")]
    TypeNotFound(String),

    #[error("failed to load {kind} '{name}'")]
    Loader {
        kind: &'static str,
        name: String,
        #[source]
        source: LoaderError,
    },
}

/// Deduplicated types, in the order they were first seen.
#[derive(Debug, Clone, Default)]
pub struct ResolvedTypes {
    types: IndexSet<TypeDef>,
}

impl ResolvedTypes {
    /// Add a type; returns `false` if a type with the same name is present.
    pub fn insert(&mut self, def: TypeDef) -> bool {
        self.types.insert(def)
    }

    pub fn contains(&self, name: &TypeName) -> bool {
        self.iter().any(|def| &def.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeDef> {
        self.types.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &TypeName> {
        self.iter().map(|def| &def.name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl IntoIterator for ResolvedTypes {
    type Item = TypeDef;
    type IntoIter = indexmap::set::IntoIter<TypeDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.into_iter()
    }
}

/// Resolve package and type names into one deduplicated set.
///
/// Packages are expanded first, then explicit types are added. A type named
/// both ways appears once.
///
/// # Errors
///
/// Fails on a malformed name, on an explicit type the loader does not know,
/// or when the loader itself fails.
pub fn resolve<S: AsRef<str>>(
    packages: &[S],
    types: &[S],
    loader: &(impl TypeLoader + ?Sized),
) -> Result<ResolvedTypes, TypeResolutionError> {
    let mut resolved = ResolvedTypes::default();

    for package in packages.iter().map(AsRef::as_ref) {
        validate_package(package).map_err(|source| TypeResolutionError::InvalidName {
            kind: "package",
            name: package.to_string(),
            source,
        })?;
        let members =
            loader
                .package_types(package)
                .map_err(|source| TypeResolutionError::Loader {
                    kind: "package",
                    name: package.to_string(),
                    source,
                })?;
        tracing::debug!(package, members = members.len(), "expanded package");
        members.into_iter().for_each(|def| {
            resolved.insert(def);
        });
    }

    for qualified in types.iter().map(AsRef::as_ref) {
        let name =
            TypeName::parse(qualified).map_err(|source| TypeResolutionError::InvalidName {
                kind: "type",
                name: qualified.to_string(),
                source,
            })?;
        let def = loader
            .load_type(&name)
            .map_err(|source| TypeResolutionError::Loader {
                kind: "type",
                name: qualified.to_string(),
                source,
            })?
            .ok_or_else(|| TypeResolutionError::TypeNotFound(qualified.to_string()))?;
        if !resolved.insert(def) {
            tracing::debug!(type_name = qualified, "type already resolved from a package");
        }
    }

    Ok(resolved)
}
