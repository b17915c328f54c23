//! Names and field types.

use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};

/// Error raised when a dotted name or a field type cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("name is empty")]
    Empty,
    #[error("'{0}' contains an empty segment")]
    EmptySegment(String),
    #[error("'{name}' has an invalid segment '{segment}'")]
    InvalidSegment { name: String, segment: String },
    #[error("unknown field type '{0}'")]
    UnknownType(String),
}

/// A package-qualified type name such as `org.acme.hr.Employee`.
///
/// Equality and hashing follow the qualified form, so two names for the
/// same type are interchangeable in sets and maps. Names order by package,
/// then by simple name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeName {
    package: String,
    name: String,
}

impl TypeName {
    /// Create a name from its package and simple name.
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }

    /// Parse a dotted qualified name. The last segment is the simple name.
    pub fn parse(qualified: &str) -> Result<Self, ParseError> {
        let segments = split_segments(qualified)?;
        let (name, package) = segments.split_last().ok_or(ParseError::Empty)?;
        Ok(Self::new(package.join("."), *name))
    }

    /// The dotted package, empty for the root package.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// The simple (unqualified) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The dotted fully-qualified name.
    pub fn qualified(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }

    /// Package segments, outermost first.
    pub fn package_segments(&self) -> impl Iterator<Item = &str> {
        self.package.split('.').filter(|s| !s.is_empty())
    }

    /// Whether this type lives in `package` or in one of its sub-packages.
    pub fn is_in_package(&self, package: &str) -> bool {
        match self.package.strip_prefix(package) {
            Some(rest) => rest.is_empty() || rest.starts_with('.'),
            None => false,
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.package, self.name)
        }
    }
}

impl FromStr for TypeName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TypeName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        crate::serde_helpers::serialize_display(self, serializer)
    }
}

/// Check that `package` is a well-formed dotted package name.
pub fn validate_package(package: &str) -> Result<(), ParseError> {
    split_segments(package).map(|_| ())
}

fn split_segments(dotted: &str) -> Result<Vec<&str>, ParseError> {
    if dotted.is_empty() {
        return Err(ParseError::Empty);
    }

    let segments: Vec<&str> = dotted.split('.').collect();
    for segment in &segments {
        if segment.is_empty() {
            return Err(ParseError::EmptySegment(dotted.to_string()));
        }
        if !is_identifier(segment) {
            return Err(ParseError::InvalidSegment {
                name: dotted.to_string(),
                segment: segment.to_string(),
            });
        }
    }
    Ok(segments)
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// The shape of a field, as written in a type catalog.
///
/// Catalog syntax: `bool`, `int`, `float`, `string`, `path`, `list<T>`,
/// `option<T>`, or a qualified type name whose simple name starts with an
/// uppercase letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Bool,
    Int,
    Float,
    String,
    Path,
    List(Box<FieldType>),
    Optional(Box<FieldType>),
    Named(TypeName),
}

impl FieldType {
    /// Named catalog types referenced anywhere in this type.
    pub fn referenced_types(&self) -> Vec<&TypeName> {
        match self {
            FieldType::List(inner) | FieldType::Optional(inner) => inner.referenced_types(),
            FieldType::Named(name) => vec![name],
            _ => Vec::new(),
        }
    }
}

impl FromStr for FieldType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(inner) = generic_arg(s, "list") {
            return Ok(FieldType::List(Box::new(inner.parse()?)));
        }
        if let Some(inner) = generic_arg(s, "option") {
            return Ok(FieldType::Optional(Box::new(inner.parse()?)));
        }

        match s {
            "bool" => Ok(FieldType::Bool),
            "int" => Ok(FieldType::Int),
            "float" => Ok(FieldType::Float),
            "string" => Ok(FieldType::String),
            "path" => Ok(FieldType::Path),
            _ => {
                let name =
                    TypeName::parse(s).map_err(|_| ParseError::UnknownType(s.to_string()))?;
                if name.name().starts_with(char::is_uppercase) {
                    Ok(FieldType::Named(name))
                } else {
                    Err(ParseError::UnknownType(s.to_string()))
                }
            }
        }
    }
}

fn generic_arg<'a>(s: &'a str, wrapper: &str) -> Option<&'a str> {
    s.strip_prefix(wrapper)?
        .strip_prefix('<')?
        .strip_suffix('>')
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Bool => write!(f, "bool"),
            FieldType::Int => write!(f, "int"),
            FieldType::Float => write!(f, "float"),
            FieldType::String => write!(f, "string"),
            FieldType::Path => write!(f, "path"),
            FieldType::List(inner) => write!(f, "list<{}>", inner),
            FieldType::Optional(inner) => write!(f, "option<{}>", inner),
            FieldType::Named(name) => write!(f, "{}", name),
        }
    }
}

impl Serialize for FieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        crate::serde_helpers::serialize_display(self, serializer)
    }
}
