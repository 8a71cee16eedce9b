//!
//! The benchmark and tag name validator.
//!

pub mod mode;


use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Error;

pub use self::mode::Mode;

/// The identifier shape. Dashes must be replaced with underscores beforehand.
static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{XID_Start}_]\p{XID_Continue}*$").expect("Always valid"));

/// The identifier shape with a relaxed first character.
static IDENTIFIER_NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{XID_Continue}+$").expect("Always valid"));

///
/// Checks that `name` is a valid benchmark or tag name in the specified `mode`.
///
/// The same rule is shared by benchmark names, tags, and group names.
///
pub fn check_name(name: &str, mode: Mode) -> Result<(), Error> {
    if name.is_empty() {
        return Err(Error::invalid_identifier(name, "the name is empty"));
    }
    if mode.loose {
        return Ok(());
    }

    if !mode.allow_numeric && name.starts_with('-') {
        return Err(Error::invalid_identifier(name, "the name starts with `-`"));
    }

    let normalized = name.replace('-', "_");
    let shape = if mode.allow_numeric {
        &IDENTIFIER_NUMERIC
    } else {
        &IDENTIFIER
    };
    if !shape.is_match(normalized.as_str()) {
        return Err(Error::invalid_identifier(
            name,
            if mode.allow_numeric {
                "only letters, digits, `_` and `-` are allowed"
            } else {
                "expected a letter or `_` followed by letters, digits, `_` or `-`"
            },
        ));
    }

    Ok(())
}
