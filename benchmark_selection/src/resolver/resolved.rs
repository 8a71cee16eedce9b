//!
//! The resolved benchmark selection.
//!

use crate::selection::Selection;

///
/// The resolved benchmark selection.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// The distinct benchmark names in the manifest order.
    pub benchmarks: Vec<String>,
    /// The selections that matched nothing, in the input order.
    pub unmatched: Vec<Selection>,
}

impl Resolved {
    ///
    /// Whether nothing is selected.
    ///
    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_empty()
    }

    ///
    /// Returns the number of selected benchmarks.
    ///
    pub fn len(&self) -> usize {
        self.benchmarks.len()
    }
}
