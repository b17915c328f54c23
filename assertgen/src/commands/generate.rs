use assertgen_manifest::AssertgenToml;
use clap::Args;
use eyre::Result;

use super::{SelectionArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Format, emit},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Exit with a non-zero status when generation halts on an error (default)
    #[arg(long, overrides_with = "no_fail_on_error")]
    pub fail_on_error: bool,

    /// Exit successfully even when generation halts on an error
    #[arg(long, overrides_with = "fail_on_error")]
    pub no_fail_on_error: bool,
}

impl GenerateCommand {
    /// The last of `--fail-on-error`/`--no-fail-on-error` wins; failing is the default.
    fn fails_on_error(&self) -> bool {
        self.fail_on_error || !self.no_fail_on_error
    }

    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = AssertgenToml::open(&self.selection.config).unwrap_or_exit();
        let request = ops::build_request(&file.manifest().generate, &self.selection.overrides())?;

        let report = ops::generate(&file, &request);
        emit(&report, self.format)?;

        if !report.is_success() && self.fails_on_error() {
            std::process::exit(1);
        }
        Ok(())
    }
}
