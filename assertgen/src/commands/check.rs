use assertgen_manifest::AssertgenToml;
use clap::Args;
use eyre::Result;

use super::{SelectionArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Format, emit},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = AssertgenToml::open(&self.selection.config).unwrap_or_exit();
        let request = ops::build_request(&file.manifest().generate, &self.selection.overrides())?;

        let report = ops::check(&file, &request);
        emit(&report, self.format)?;

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
