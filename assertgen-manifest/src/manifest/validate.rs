//! Validation context and utilities for catalog parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Nested contexts share one [`SourceContext`] and add a path segment, so
/// error messages can name where in the file a problem sits.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "assertgen.toml");
/// let employee = ctx.push("p1.Employee");
/// employee.validate_name("manager", "field")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: Arc<SourceContext>,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    pub fn src(&self) -> &str {
        self.source.src()
    }

    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    /// The current path, joined with `/` (type names already contain dots).
    pub fn path_string(&self) -> String {
        self.path.join("/")
    }

    /// Describe `kind` in the current location, e.g. "field of 'p1.Employee'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} of '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a table key in the source.
    pub fn find_key_span(&self, key: &str) -> Option<SourceSpan> {
        find_key_span(self.source.src(), key)
    }

    /// Find the span of a quoted string value in the source.
    pub fn find_value_span(&self, value: &str) -> Option<SourceSpan> {
        find_value_span(self.source.src(), value)
    }

    /// Validate that a name can be used as a Rust identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_rust_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_key_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_key_span(name),
            ));
        }

        Ok(())
    }
}

/// Rust reserved keywords that cannot be used as identifiers
/// Source: https://doc.rust-lang.org/reference/keywords.html
pub(crate) const RUST_KEYWORDS: &[&str] = &[
    // Strict keywords
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
    // Reserved keywords
    "abstract", "become", "box", "do", "final", "macro", "override", "priv", "try", "typeof",
    "unsized", "virtual", "yield",
    // Weak keywords
    "union",
];

/// Whether `name` is a strict or reserved Rust keyword.
pub fn is_rust_keyword(name: &str) -> bool {
    RUST_KEYWORDS.contains(&name)
}

/// Return why `name` is not a valid identifier, or `None` if it is.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_ascii_digit() => return Some("name cannot start with a digit"),
        Some(c) if !(c.is_alphabetic() || c == '_') => {
            return Some("name must start with a letter or underscore");
        }
        _ => {}
    }
    if chars.any(|c| !(c.is_alphanumeric() || c == '_')) {
        return Some("name contains invalid characters");
    }
    None
}

/// Find the span of a key in the TOML source.
///
/// Looks for quoted keys (`"p1.Employee"`), then `key =` and `key=` forms.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", key);
    if let Some(pos) = src.find(&quoted) {
        return Some(SourceSpan::from((pos + 1, key.len())));
    }

    for pattern in [format!("{} =", key), format!("{}=", key)] {
        let mut offset = 0;
        while let Some(pos) = src[offset..].find(&pattern) {
            let start = offset + pos;
            // Only accept a match at the start of a key, not inside a longer one.
            let boundary = src[..start]
                .chars()
                .next_back()
                .is_none_or(|c| c.is_whitespace() || c == '{' || c == ',' || c == '.');
            if boundary {
                return Some(SourceSpan::from((start, key.len())));
            }
            offset = start + pattern.len();
        }
    }

    None
}

/// Find the span of a quoted string value in the TOML source.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", value);
    src.find(&quoted)
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}
