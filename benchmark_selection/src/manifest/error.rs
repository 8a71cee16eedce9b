//!
//! The manifest loading error.
//!

use std::path::PathBuf;

use crate::error::Error as SelectionError;

///
/// The manifest loading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the manifest file.
    #[error("Reading manifest file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the manifest file.
        path: PathBuf,
    },
    /// Error parsing the manifest.
    #[error("Parsing manifest: {error}")]
    Parsing {
        /// The underlying YAML parsing error.
        error: serde_yaml::Error,
    },
    /// A benchmark, tag, or group name is malformed.
    #[error("Manifest name validation: {0}")]
    InvalidName(#[from] SelectionError),
    /// A benchmark name is registered twice.
    #[error("Benchmark `{name}` is defined more than once")]
    DuplicateBenchmark {
        /// The benchmark name.
        name: String,
    },
    /// A reserved group name is redefined.
    #[error("Group name `{name}` is reserved")]
    ReservedGroup {
        /// The group name.
        name: String,
    },
    /// A name is used both as a tag and as a group.
    #[error("`{name}` is defined both as a tag and as a group")]
    GroupConflict {
        /// The group name.
        name: String,
    },
    /// A group definition references nothing known.
    #[error("Group `{group}` references unknown benchmark or group `{member}`")]
    UnknownMember {
        /// The group name.
        group: String,
        /// The unmatched selection.
        member: String,
    },
    /// Group definitions reference each other.
    #[error("Group `{group}` is defined recursively: {cycle}")]
    GroupCycle {
        /// The group name.
        group: String,
        /// The reference chain.
        cycle: String,
    },
}
