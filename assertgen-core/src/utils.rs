//! Shared naming helpers for code generation.

use std::path::PathBuf;

/// Convert a string to snake_case (e.g., "HelloWorld" -> "hello_world")
///
/// Runs of capitals are kept together, so "HTTPServer" becomes "http_server".
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                result.push('_');
            }
        }
        result.extend(c.to_lowercase());
    }
    result.replace('-', "_")
}

/// Map a dotted package name to a relative directory path ("a.b.c" -> "a/b/c").
///
/// The empty package maps to the empty path.
pub fn package_to_path(package: &str) -> PathBuf {
    package.split('.').filter(|s| !s.is_empty()).collect()
}

/// Longest dotted prefix shared by every package.
///
/// Returns an empty string when no segment is shared or the input is empty.
pub fn common_package<'a>(packages: impl IntoIterator<Item = &'a str>) -> String {
    let mut packages = packages.into_iter();
    let Some(first) = packages.next() else {
        return String::new();
    };
    let mut common: Vec<&str> = first.split('.').filter(|s| !s.is_empty()).collect();

    for package in packages {
        let shared = common
            .iter()
            .zip(package.split('.'))
            .take_while(|(a, b)| *a == b)
            .count();
        common.truncate(shared);
    }

    common.join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Employee"), "employee");
        assert_eq!(to_snake_case("HelloWorld"), "hello_world");
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
        assert_eq!(to_snake_case("Address2Line"), "address2_line");
        assert_eq!(to_snake_case("hello-world"), "hello_world");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_package_to_path() {
        assert_eq!(package_to_path("org.acme.hr"), PathBuf::from("org/acme/hr"));
        assert_eq!(package_to_path("p1"), PathBuf::from("p1"));
        assert_eq!(package_to_path(""), PathBuf::new());
    }

    #[test]
    fn test_common_package() {
        assert_eq!(common_package(["org.acme.hr", "org.acme.geo"]), "org.acme");
        assert_eq!(common_package(["org.acme.hr"]), "org.acme.hr");
        assert_eq!(common_package(["p1", "p2"]), "");
        assert_eq!(common_package(["org.acme", "org.acme.hr"]), "org.acme");
        assert_eq!(common_package(std::iter::empty()), "");
    }
}
