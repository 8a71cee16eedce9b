//!
//! The benchmark selection and the selection list parser.
//!

pub mod operator;
pub mod raw;


use std::convert::Infallible;

use crate::error::Error;
use crate::pattern::Pattern;

use self::operator::Operator;
use self::raw::RawSelection;

///
/// A single parsed selection directive.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selection {
    /// The operator.
    pub operator: Operator,
    /// The token text without the operator prefix.
    pub text: String,
    /// The pattern parsed from `text`.
    pub pattern: Pattern,
}

impl Selection {
    ///
    /// Classifies `text` as a tag reference or a benchmark name.
    ///
    pub fn new(operator: Operator, text: &str) -> Result<Self, Error> {
        Ok(Self {
            operator,
            text: text.to_owned(),
            pattern: Pattern::parse(text)?,
        })
    }

    ///
    /// Parses a comma-separated selection expression.
    ///
    pub fn parse_all(raw: &str) -> Result<Vec<Self>, Error> {
        parse_selections(split_selections(raw), Self::new)
    }

    ///
    /// Parses an already split selection expression.
    ///
    pub fn parse_tokens<I, S>(tokens: I) -> Result<Vec<Self>, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        parse_selections(tokens, Self::new)
    }

    ///
    /// Whether the selection removes benchmarks.
    ///
    pub fn is_exclusion(&self) -> bool {
        self.operator == Operator::Exclude
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_exclusion() {
            write!(f, "{}", Operator::EXCLUDE_PREFIX)?;
        }
        write!(f, "{}", self.text)
    }
}

///
/// Splits a selection expression into tokens.
///
pub fn split_selections(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',')
}

///
/// Parses selection tokens into entries built by `parse_entry`.
///
/// Tokens are trimmed and blank ones are skipped. A single leading `-` sets
/// the exclusion operator and is stripped before `parse_entry` sees the text.
/// The entries keep the input order and are not deduplicated.
///
pub fn parse_selections<I, S, F, T, E>(tokens: I, mut parse_entry: F) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(Operator, &str) -> Result<T, E>,
{
    let mut entries = Vec::new();
    for token in tokens {
        let token = token.as_ref().trim();
        if token.is_empty() {
            continue;
        }

        let (operator, text) = match token.strip_prefix(Operator::EXCLUDE_PREFIX) {
            Some(text) => (Operator::Exclude, text),
            None => (Operator::Include, token),
        };
        entries.push(parse_entry(operator, text)?);
    }
    Ok(entries)
}

///
/// Parses selection tokens without interpreting their text.
///
pub fn parse_raw_selections<I, S>(tokens: I) -> Vec<RawSelection>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    match parse_selections(tokens, |operator, text| {
        Ok::<_, Infallible>(RawSelection::new(operator, text))
    }) {
        Ok(entries) => entries,
        Err(infallible) => match infallible {},
    }
}
