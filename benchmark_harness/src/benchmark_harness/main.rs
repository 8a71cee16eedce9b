//!
//! The benchmark harness executable.
//!

pub(crate) mod arguments;

use std::io::Write;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;
use self::arguments::Command;

///
/// The application entry point.
///
fn main() {
    let arguments = match Arguments::try_parse() {
        Ok(arguments) => arguments,
        Err(error) => error.exit(),
    };
    let exit_code = match main_inner(arguments) {
        Ok(()) => benchmark_harness::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{} {error:?}", "Error:".bright_red().bold());
            benchmark_harness::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let config = match arguments.config.as_deref() {
        Some(path) => benchmark_harness::Config::try_from(path)?,
        None => benchmark_harness::Config::default(),
    };
    let arguments = arguments::validation::validate_arguments(arguments, &config)?;
    let (verbose, quiet) = (arguments.verbose, arguments.quiet);

    if !quiet {
        eprintln!(
            "    {} {} v{}",
            "Starting".bright_green().bold(),
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_VERSION"),
        );
    }

    let mut stdout = std::io::stdout().lock();
    match arguments.command {
        Command::List(filter) => {
            let harness = benchmark_harness::Harness::new(
                config.manifest_path(filter.manifest.manifest).as_path(),
                config.legacy_guard,
                verbose,
                quiet,
            )?;
            let resolved = harness.select(&filter.benchmarks)?;
            benchmark_harness::write_benchmarks(&mut stdout, resolved.benchmarks.as_slice())?;
        }
        Command::ListGroups(manifest) => {
            let harness = benchmark_harness::Harness::new(
                config.manifest_path(manifest.manifest).as_path(),
                config.legacy_guard,
                verbose,
                quiet,
            )?;
            benchmark_harness::write_groups(&mut stdout, harness.manifest())?;
        }
        Command::Select(select) => {
            let harness = benchmark_harness::Harness::new(
                config.manifest_path(select.filter.manifest.manifest).as_path(),
                config.legacy_guard,
                verbose,
                quiet,
            )?;
            let resolved = harness.select(&select.filter.benchmarks)?;
            if resolved.is_empty() && !(select.allow_no_benchmarks || config.allow_no_benchmarks) {
                anyhow::bail!("No benchmarks selected");
            }

            let count = resolved.len();
            let report = benchmark_harness::Report::new(
                resolved,
                select.inherit_environ.unwrap_or_default().0,
            );
            match select.output {
                Some(path) => report.write_to_file(path.as_path(), select.format)?,
                None => report.write(&mut stdout, select.format)?,
            }

            if !quiet {
                eprintln!(
                    "    {} selecting {count} benchmarks",
                    "Finished".bright_green().bold(),
                );
            }
        }
    }
    stdout.flush()?;

    Ok(())
}
