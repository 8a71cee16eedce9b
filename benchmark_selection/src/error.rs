//!
//! The benchmark selection error.
//!

///
/// The benchmark selection error.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A benchmark name or tag is malformed.
    #[error("Invalid identifier {name:?}: {reason}")]
    InvalidIdentifier {
        /// The offending text.
        name: String,
        /// The violated rule.
        reason: &'static str,
    },
    /// The selection cannot be expressed by the legacy resolver.
    #[error("Unsupported selection `{selection}`: {reason}")]
    UnsupportedSelection {
        /// The offending selection, as written by the user.
        selection: String,
        /// The rejection reason.
        reason: &'static str,
    },
}

impl Error {
    ///
    /// A shortcut constructor.
    ///
    pub fn invalid_identifier(name: &str, reason: &'static str) -> Self {
        Self::InvalidIdentifier {
            name: name.to_owned(),
            reason,
        }
    }
}
