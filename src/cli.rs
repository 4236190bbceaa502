//! Command-line interface implementation for stamp.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::error::Result;

/// Command-line arguments structure for stamp.
#[derive(Parser, Debug)]
#[command(author, version, about = "stamp: build-time code and manifest generation", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Project root the generators work in
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Configuration file (defaults to stamp.json, stamp.yml or stamp.yaml in the root)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Render everything but do not write any file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Generate one extensions file per configured type
    Code,
    /// Generate the project manifest listing root files
    Manifest,
    /// Run every generator
    All,
}

/// Command used to print help when no subcommand was given.
pub fn help_command() -> clap::Command {
    Args::command().help_template(
        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
    )
}

/// Parses command line arguments and returns the Args structure.
///
/// # Errors
/// * `Error::IoError` if the help text cannot be printed
///
/// # Exits
/// * With status code 1 if no command was given, after printing the help
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Result<Args> {
    match Args::try_parse() {
        Ok(args) => Ok(args),
        Err(e)
            if matches!(
                e.kind(),
                ErrorKind::MissingSubcommand | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) =>
        {
            help_command().print_help()?;
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    }
}
