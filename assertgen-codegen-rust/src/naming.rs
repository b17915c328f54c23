//! Names and paths of generated Rust items.
//!
//! Catalog packages map onto modules under the crate root, so `p1.Employee`
//! is `crate::p1::Employee`.

use std::path::PathBuf;

use assertgen_core::{package_to_path, to_snake_case};
use assertgen_ir::TypeName;
use assertgen_manifest::is_rust_keyword;

/// Path of the subject type, e.g. `crate::org::acme::Employee`.
pub fn type_path(name: &TypeName) -> String {
    std::iter::once("crate")
        .chain(name.package_segments())
        .chain(std::iter::once(name.name()))
        .collect::<Vec<_>>()
        .join("::")
}

/// Module holding `name`, e.g. `crate::org::acme`.
pub fn module_path(name: &TypeName) -> String {
    std::iter::once("crate")
        .chain(name.package_segments())
        .collect::<Vec<_>>()
        .join("::")
}

pub fn assert_struct_name(name: &TypeName) -> String {
    format!("{}Assert", name.name())
}

pub fn assert_module_name(name: &TypeName) -> String {
    format!("{}_assert", to_snake_case(name.name()))
}

/// File of the assertions for `name`, relative to the output directory.
pub fn assert_file_path(name: &TypeName) -> PathBuf {
    package_to_path(name.package()).join(format!("{}.rs", assert_module_name(name)))
}

/// A field name usable after `.`, escaping keywords as raw identifiers.
pub fn field_ident(field: &str) -> String {
    if is_rust_keyword(field) {
        format!("r#{field}")
    } else {
        field.to_string()
    }
}

/// Relative `/`-separated path from directory `from` to file `to`, both
/// given as segments below the same root.
pub fn relative_path(from: &[&str], to: &[&str]) -> String {
    let shared = from.iter().zip(to).take_while(|(a, b)| a == b).count();
    std::iter::repeat_n("..", from.len() - shared)
        .chain(to[shared..].iter().copied())
        .collect::<Vec<_>>()
        .join("/")
}
