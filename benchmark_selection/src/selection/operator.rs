//!
//! The selection operator.
//!

///
/// The selection operator.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Runs the matched benchmarks.
    #[default]
    Include,
    /// Skips the matched benchmarks.
    Exclude,
}

impl Operator {
    /// The exclusion prefix of a selection token.
    pub const EXCLUDE_PREFIX: char = '-';
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Include => write!(f, "+"),
            Self::Exclude => write!(f, "-"),
        }
    }
}
