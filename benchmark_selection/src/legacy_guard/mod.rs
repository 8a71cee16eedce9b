//!
//! The legacy selection compatibility guard.
//!


use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::Error;
use crate::identifier::check_name;
use crate::identifier::Mode;
use crate::pattern::Pattern;
use crate::selection::Selection;

///
/// The legacy selection compatibility guard.
///
/// Rejects the selections the legacy resolver could not express. It is applied
/// after parsing and before resolution, and does not alter the resolution.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LegacyGuard {
    /// Rejects `-name` if `name` is a group.
    pub reject_negated_group_names: bool,
    /// Rejects `-<tag>` if `tag` is a group.
    pub reject_negated_tags: bool,
}

impl Default for LegacyGuard {
    fn default() -> Self {
        Self {
            reject_negated_group_names: true,
            reject_negated_tags: false,
        }
    }
}

impl LegacyGuard {
    ///
    /// Checks every selection, failing on the first unsupported one.
    ///
    pub fn check<C>(&self, selections: &[Selection], catalog: &C) -> Result<(), Error>
    where
        C: Catalog + ?Sized,
    {
        for selection in selections.iter() {
            self.check_selection(selection, catalog)?;
        }
        Ok(())
    }

    ///
    /// Checks a single selection.
    ///
    fn check_selection<C>(&self, selection: &Selection, catalog: &C) -> Result<(), Error>
    where
        C: Catalog + ?Sized,
    {
        let is_concrete = match &selection.pattern {
            Pattern::Name(name) => Pattern::try_parse_name(name.as_str()).is_some(),
            Pattern::Tag(tag) => check_name(tag.as_str(), Mode::STRICT).is_ok(),
        };
        if !is_concrete {
            return Err(Error::UnsupportedSelection {
                selection: selection.to_string(),
                reason: "only benchmark names and tags are supported",
            });
        }

        if !selection.is_exclusion() {
            return Ok(());
        }
        let is_rejected = match &selection.pattern {
            Pattern::Name(name) => {
                self.reject_negated_group_names && catalog.contains_group(name.as_str())
            }
            Pattern::Tag(tag) => self.reject_negated_tags && catalog.contains_group(tag.as_str()),
        };
        if is_rejected {
            return Err(Error::UnsupportedSelection {
                selection: selection.to_string(),
                reason: "negative groups not supported",
            });
        }

        Ok(())
    }
}
