//!
//! The read-only view of the benchmark registry used by the selection engine.
//!

use std::collections::BTreeSet;

///
/// The read-only view of the benchmark registry used by the selection engine.
///
pub trait Catalog {
    ///
    /// Returns all benchmark names in the registration order.
    ///
    fn benchmark_names(&self) -> Vec<&str>;

    ///
    /// Whether a benchmark with the specified name exists.
    ///
    fn contains_benchmark(&self, name: &str) -> bool;

    ///
    /// Returns all group names in the lexicographical order.
    ///
    fn group_names(&self) -> Vec<&str>;

    ///
    /// Returns the members of the specified group or tag.
    ///
    fn group(&self, name: &str) -> Option<&BTreeSet<String>>;

    ///
    /// Whether a group or tag with the specified name exists.
    ///
    fn contains_group(&self, name: &str) -> bool {
        self.group(name).is_some()
    }
}
