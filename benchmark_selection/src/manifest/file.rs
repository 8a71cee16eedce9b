//!
//! The manifest file representation.
//!

use std::collections::BTreeMap;

use serde::Deserialize;

use super::benchmark::Benchmark;

///
/// The manifest file representation.
///
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct File {
    /// The benchmarks in the canonical order.
    pub benchmarks: Vec<Benchmark>,
    /// The group definitions as lists of selection tokens.
    #[serde(default)]
    pub groups: BTreeMap<String, Vec<String>>,
}
