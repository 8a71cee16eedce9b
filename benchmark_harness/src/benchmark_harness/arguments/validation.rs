//!
//! Validate the arguments passed from user, checking invariants that are not
//! expressed in the type system.
//!

use benchmark_harness::Config;

use super::Arguments;
use super::Command;

///
/// Validate the arguments passed from user, checking invariants that are not
/// expressed in the type system.
///
pub fn validate_arguments(arguments: Arguments, config: &Config) -> anyhow::Result<Arguments> {
    if arguments.verbose && arguments.quiet {
        anyhow::bail!("Arguments `--verbose` and `--quiet` are mutually exclusive.");
    }

    let is_empty_rejected = match &arguments.command {
        Command::List(filter) => filter.benchmarks.is_nothing(),
        Command::ListGroups(_) => false,
        Command::Select(select) => {
            select.filter.benchmarks.is_nothing()
                && !(select.allow_no_benchmarks || config.allow_no_benchmarks)
        }
    };
    if is_empty_rejected {
        anyhow::bail!("--benchmarks cannot be empty");
    }

    Ok(arguments)
}
