mod check;
mod completions;
mod generate;
mod list;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{ArgAction, Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use list::ListCommand;

use crate::ops::Overrides;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for assertgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Which types to work on, layered over the manifest's `[generate]` section.
#[derive(Args)]
pub(crate) struct SelectionArgs {
    /// Path to assertgen.toml (defaults to ./assertgen.toml)
    #[arg(short, long, default_value = "assertgen.toml")]
    pub config: PathBuf,

    /// Package to generate assertions for, including its sub-packages (repeatable)
    #[arg(short, long = "package", value_name = "PACKAGE")]
    pub packages: Vec<String>,

    /// Fully-qualified type to generate assertions for (repeatable)
    #[arg(short, long = "type", value_name = "TYPE")]
    pub types: Vec<String>,

    /// Output directory (overrides [generate].output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Package of the aggregated entry point (empty picks the default)
    #[arg(long, value_name = "PACKAGE")]
    pub entry_point_package: Option<String>,
}

impl SelectionArgs {
    pub fn overrides(&self) -> Overrides<'_> {
        Overrides {
            packages: &self.packages,
            types: &self.types,
            output: self.output.as_deref(),
            entry_point_package: self.entry_point_package.as_deref(),
        }
    }
}

#[derive(Parser)]
#[command(name = "assertgen")]
#[command(version)]
#[command(about = "Generate fluent assertions from TOML type catalogs")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

impl Cli {
    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate assertions for the configured packages and types
    Generate(GenerateCommand),

    /// Validate assertgen.toml and resolve types without writing files
    Check(CheckCommand),

    /// List the types on the classpath, grouped by package
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_repeatable_selection_flags() {
        let cli = Cli::try_parse_from([
            "assertgen", "generate", "-p", "p1", "--package", "p2", "-t", "p3.Invoice", "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbose(), 2);
        let Commands::Generate(cmd) = &cli.command else {
            panic!("expected the generate command");
        };
        let overrides = cmd.selection.overrides();
        assert_eq!(overrides.packages, ["p1", "p2"]);
        assert_eq!(overrides.types, ["p3.Invoice"]);
        assert!(overrides.output.is_none());
    }
}
