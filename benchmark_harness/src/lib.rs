//!
//! The benchmark harness library.
//!

pub(crate) mod benchmarks_option;
pub(crate) mod config;
pub(crate) mod inherit_environ;
pub(crate) mod listing;
pub(crate) mod output;

pub use self::benchmarks_option::BenchmarksOption;
pub use self::config::Config;
pub use self::inherit_environ::InheritEnviron;
pub use self::listing::write_benchmarks;
pub use self::listing::write_groups;
pub use self::output::format::Format as OutputFormat;
pub use self::output::Report;

use std::path::Path;

use colored::Colorize;

use benchmark_selection::LegacyGuard;
use benchmark_selection::Manifest;
use benchmark_selection::Resolved;
use benchmark_selection::Resolver;

/// The successful exit code.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The failure exit code.
pub const EXIT_CODE_FAILURE: i32 = 1;

///
/// The benchmark harness.
///
pub struct Harness {
    /// The benchmark manifest.
    manifest: Manifest,
    /// The legacy selection compatibility guard.
    legacy_guard: LegacyGuard,
    /// Whether the selections are echoed.
    verbose: bool,
    /// Whether the warnings are suppressed.
    quiet: bool,
}

impl Harness {
    ///
    /// Loads the manifest from `manifest_path`.
    ///
    pub fn new(
        manifest_path: &Path,
        legacy_guard: LegacyGuard,
        verbose: bool,
        quiet: bool,
    ) -> anyhow::Result<Self> {
        if verbose {
            eprintln!(
                "     {} manifest {}",
                "Loading".bright_green().bold(),
                manifest_path.display()
            );
        }
        let manifest = Manifest::try_from(manifest_path)
            .map_err(|error| anyhow::anyhow!("Benchmark manifest {manifest_path:?}: {error}"))?;

        Ok(Self {
            manifest,
            legacy_guard,
            verbose,
            quiet,
        })
    }

    ///
    /// Returns the loaded manifest.
    ///
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    ///
    /// Resolves the benchmarks requested with `--benchmarks`.
    ///
    /// Unmatched selections are reported as warnings.
    ///
    pub fn select(&self, option: &BenchmarksOption) -> anyhow::Result<Resolved> {
        let selections = match option {
            BenchmarksOption::Nothing => return Ok(Resolved::default()),
            BenchmarksOption::Selections(selections) => selections,
        };
        if self.verbose {
            eprintln!(
                "   {} {}",
                "Selecting".bright_green().bold(),
                selections
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<String>>()
                    .join(","),
            );
        }

        let resolved = Resolver::new(&self.manifest)
            .with_legacy_guard(self.legacy_guard)
            .resolve_selections(selections.as_slice())?;

        if !self.quiet {
            for selection in resolved.unmatched.iter() {
                eprintln!(
                    "{} no benchmark named {:?}",
                    "Warning:".bright_yellow().bold(),
                    selection.to_string(),
                );
            }
        }
        Ok(resolved)
    }
}
