//! Serde helpers for types that serialize through their `Display` form.

use std::fmt::Display;

use serde::Serializer;

/// Serialize any `Display` value as a string.
pub fn serialize_display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}
