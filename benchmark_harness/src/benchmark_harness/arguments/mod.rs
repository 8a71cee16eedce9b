//!
//! The benchmark harness arguments.
//!

pub mod validation;

use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;

use benchmark_harness::BenchmarksOption;
use benchmark_harness::InheritEnviron;
use benchmark_harness::OutputFormat;

///
/// The benchmark harness arguments.
///
#[derive(Debug, Parser)]
#[command(about, version, long_about = None)]
pub struct Arguments {
    /// Prints the manifest path and the parsed selections.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppresses the status lines and warnings.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the JSON config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The action to perform.
    #[command(subcommand)]
    pub command: Command,
}

///
/// The benchmark harness subcommands.
///
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Lists the selected benchmarks of the manifest.
    List(FilterArguments),

    /// Lists the benchmark groups of the manifest.
    #[command(alias = "list_groups")]
    ListGroups(ManifestArguments),

    /// Resolves the selected benchmarks for the benchmark runner.
    Select(SelectArguments),
}

///
/// The manifest location arguments.
///
#[derive(Debug, Args)]
pub struct ManifestArguments {
    /// The benchmark manifest file, or the directory containing `manifest.yaml`.
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

///
/// The benchmark filtering arguments.
///
#[derive(Debug, Args)]
pub struct FilterArguments {
    #[command(flatten)]
    pub manifest: ManifestArguments,

    /// Comma-separated list of benchmarks to run. Can contain both positive and
    /// negative arguments: `--benchmarks=run_this,also_this,-not_this`. If there are
    /// no positive arguments, all benchmarks except the negative arguments are run.
    /// Otherwise only the positive arguments are run. Groups are referenced as `<group>`.
    #[arg(
        short,
        long,
        value_name = "BM_LIST",
        default_value = BenchmarksOption::DEFAULT,
        allow_hyphen_values = true
    )]
    pub benchmarks: BenchmarksOption,
}

///
/// The `select` subcommand arguments.
///
#[derive(Debug, Args)]
pub struct SelectArguments {
    #[command(flatten)]
    pub filter: FilterArguments,

    /// The output file. If unset, the selection is printed to `stdout`.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// The output format: `plain` or `json`.
    #[arg(long, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Accepts `--benchmarks=<NONE>` and empty selections.
    #[arg(long)]
    pub allow_no_benchmarks: bool,

    /// Comma-separated list of environment variable names the runner inherits
    /// from the parent environment.
    #[arg(long, value_name = "VAR_LIST")]
    pub inherit_environ: Option<InheritEnviron>,
}
