//!
//! The benchmark selection pattern.
//!


use crate::error::Error;
use crate::identifier::check_name;
use crate::identifier::Mode;

///
/// The benchmark selection pattern.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// A single benchmark, matched by its exact name.
    Name(String),
    /// Every benchmark of a group or tag.
    Tag(String),
}

impl Pattern {
    /// The tag reference opening delimiter.
    pub const TAG_PREFIX: char = '<';

    /// The tag reference closing delimiter.
    pub const TAG_SUFFIX: char = '>';

    ///
    /// Parses a tag reference if `text` is delimited, and a benchmark name otherwise.
    ///
    pub fn parse(text: &str) -> Result<Self, Error> {
        match Self::parse_tag(text)? {
            Some(pattern) => Ok(pattern),
            None => Self::parse_name(text),
        }
    }

    ///
    /// Parses a benchmark name pattern.
    ///
    pub fn parse_name(text: &str) -> Result<Self, Error> {
        check_name(text, Mode::NUMERIC)?;
        Ok(Self::Name(text.to_owned()))
    }

    ///
    /// Parses a benchmark name pattern, returning `None` if `text` is malformed.
    ///
    pub fn try_parse_name(text: &str) -> Option<Self> {
        Self::parse_name(text).ok()
    }

    ///
    /// Parses a `<tag>` reference.
    ///
    /// Returns `None` if `text` is not delimited. A delimited but malformed tag
    /// is an error and is never reinterpreted as a benchmark name.
    ///
    pub fn parse_tag(text: &str) -> Result<Option<Self>, Error> {
        let tag = match text
            .strip_prefix(Self::TAG_PREFIX)
            .and_then(|text| text.strip_suffix(Self::TAG_SUFFIX))
        {
            Some(tag) => tag,
            None => return Ok(None),
        };
        check_name(tag, Mode::STRICT)?;
        Ok(Some(Self::Tag(tag.to_owned())))
    }

    ///
    /// Returns the benchmark name or the tag.
    ///
    pub fn identifier(&self) -> &str {
        match self {
            Self::Name(name) => name.as_str(),
            Self::Tag(tag) => tag.as_str(),
        }
    }

    ///
    /// Whether the pattern is a tag reference.
    ///
    pub fn is_tag(&self) -> bool {
        matches!(self, Self::Tag(_))
    }
}

impl std::str::FromStr for Pattern {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::parse(string)
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{name}"),
            Self::Tag(tag) => write!(f, "{}{tag}{}", Self::TAG_PREFIX, Self::TAG_SUFFIX),
        }
    }
}
