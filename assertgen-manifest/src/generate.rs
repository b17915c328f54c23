//! The `[generate]` section of `assertgen.toml`.

use std::path::PathBuf;

use serde::Deserialize;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "generated-assertions";

/// Generation settings.
///
/// ```toml
/// [generate]
/// packages = ["org.acme.hr"]
/// types = ["org.acme.geo.Address"]
/// output = "target/assertions"
/// entry_point_package = "org.acme"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateConfig {
    /// Packages whose types (including sub-packages) get assertions.
    #[serde(default)]
    pub packages: Vec<String>,

    /// Explicit fully-qualified type names.
    #[serde(default)]
    pub types: Vec<String>,

    /// Directory generated files are written to.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Package of the aggregated entry point; the generator picks one when unset.
    pub entry_point_package: Option<String>,
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            packages: Vec::new(),
            types: Vec::new(),
            output: default_output(),
            entry_point_package: None,
        }
    }
}
