//!
//! The selection report handed over to the benchmark runner.
//!

pub mod format;

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use self::format::Format;

///
/// The selection report handed over to the benchmark runner.
///
#[derive(Debug, Default, Serialize)]
pub struct Report {
    /// The selected benchmarks in the manifest order.
    pub benchmarks: Vec<String>,
    /// The selections that matched nothing.
    pub unmatched: Vec<String>,
    /// The environment variables the runner must pass through.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inherit_environ: Vec<String>,
}

impl Report {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(resolved: benchmark_selection::Resolved, inherit_environ: Vec<String>) -> Self {
        Self {
            benchmarks: resolved.benchmarks,
            unmatched: resolved
                .unmatched
                .iter()
                .map(ToString::to_string)
                .collect(),
            inherit_environ,
        }
    }

    ///
    /// Writes the report in the specified format.
    ///
    pub fn write<W>(&self, writer: &mut W, format: Format) -> anyhow::Result<()>
    where
        W: Write,
    {
        match format {
            Format::Plain => {
                for benchmark in self.benchmarks.iter() {
                    writeln!(writer, "{benchmark}")?;
                }
            }
            Format::Json => {
                serde_json::to_writer_pretty(&mut *writer, self)?;
                writeln!(writer)?;
            }
        }
        Ok(())
    }

    ///
    /// Writes the report to the file at `path`.
    ///
    pub fn write_to_file(&self, path: &Path, format: Format) -> anyhow::Result<()> {
        let mut file = std::fs::File::create(path)
            .map_err(|error| anyhow::anyhow!("Output file {path:?} creating: {error}"))?;
        self.write(&mut file, format)
            .map_err(|error| anyhow::anyhow!("Output file {path:?} writing: {error}"))
    }
}
