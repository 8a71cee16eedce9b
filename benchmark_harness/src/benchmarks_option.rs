//!
//! The `--benchmarks` option value.
//!

use benchmark_selection::Selection;
use benchmark_selection::SelectionError;

///
/// The `--benchmarks` option value.
///
/// The selection is parsed eagerly, so that syntax errors are reported before
/// the manifest is read.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BenchmarksOption {
    /// The user explicitly asked for no benchmarks.
    Nothing,
    /// The parsed selection expression.
    Selections(Vec<Selection>),
}

impl BenchmarksOption {
    /// The default option value, selecting the `default` group.
    pub const DEFAULT: &'static str = "<default>";

    /// The option value selecting no benchmarks at all.
    pub const NOTHING: &'static str = "<NONE>";

    ///
    /// Whether the user explicitly asked for no benchmarks.
    ///
    pub fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }
}

impl std::str::FromStr for BenchmarksOption {
    type Err = SelectionError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        if string == Self::NOTHING {
            return Ok(Self::Nothing);
        }
        Ok(Self::Selections(Selection::parse_all(
            string.to_lowercase().as_str(),
        )?))
    }
}
