//!
//! The uninterpreted selection entry.
//!

use super::operator::Operator;

///
/// The uninterpreted selection entry.
///
/// Built by the default entry builder of the selection list parser, which
/// does not classify the token text.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSelection {
    /// The operator.
    pub operator: Operator,
    /// The token text without the operator prefix.
    pub text: String,
}

impl RawSelection {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(operator: Operator, text: &str) -> Self {
        Self {
            operator,
            text: text.to_owned(),
        }
    }
}
