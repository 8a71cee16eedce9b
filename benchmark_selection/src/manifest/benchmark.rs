//!
//! The manifest benchmark entry.
//!

use serde::Deserialize;

///
/// The manifest benchmark entry.
///
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Benchmark {
    /// The unique benchmark name.
    pub name: String,
    /// The tags, each of them is also a group.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Benchmark {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: &str, tags: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            tags: tags.iter().map(|tag| (*tag).to_owned()).collect(),
        }
    }
}
