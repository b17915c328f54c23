use std::path::PathBuf;

use assertgen_manifest::AssertgenToml;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Format, emit},
};

#[derive(Args)]
pub struct ListCommand {
    /// Path to assertgen.toml (defaults to ./assertgen.toml)
    #[arg(short, long, default_value = "assertgen.toml")]
    pub config: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let file = AssertgenToml::open(&self.config).unwrap_or_exit();
        let report = ops::list(&file).unwrap_or_exit();
        emit(&report, self.format)
    }
}
