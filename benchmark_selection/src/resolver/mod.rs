//!
//! The benchmark selection resolver.
//!

pub mod resolved;

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::error::Error;
use crate::legacy_guard::LegacyGuard;
use crate::pattern::Pattern;
use crate::selection::operator::Operator;
use crate::selection::Selection;

use self::resolved::Resolved;

///
/// The benchmark selection resolver.
///
/// If there is at least one inclusion, only the included benchmarks are
/// selected. Otherwise, every benchmark is selected. Exclusions are removed
/// in both cases, even if the same benchmark is included explicitly.
///
pub struct Resolver<'a, C>
where
    C: Catalog + ?Sized,
{
    /// The benchmark registry.
    catalog: &'a C,
    /// The optional compatibility check applied before resolution.
    legacy_guard: Option<LegacyGuard>,
}

impl<'a, C> Resolver<'a, C>
where
    C: Catalog + ?Sized,
{
    ///
    /// A shortcut constructor.
    ///
    pub fn new(catalog: &'a C) -> Self {
        Self {
            catalog,
            legacy_guard: None,
        }
    }

    ///
    /// Sets the compatibility check applied to the parsed selections.
    ///
    pub fn with_legacy_guard(mut self, legacy_guard: LegacyGuard) -> Self {
        self.legacy_guard = Some(legacy_guard);
        self
    }

    ///
    /// Parses and resolves a comma-separated selection expression.
    ///
    pub fn resolve(&self, raw: &str) -> Result<Resolved, Error> {
        let selections = Selection::parse_all(raw)?;
        self.resolve_selections(selections.as_slice())
    }

    ///
    /// Resolves already parsed selections.
    ///
    /// Selections matching nothing are reported in [`Resolved::unmatched`]
    /// and do not fail the resolution.
    ///
    pub fn resolve_selections(&self, selections: &[Selection]) -> Result<Resolved, Error> {
        if let Some(legacy_guard) = self.legacy_guard.as_ref() {
            legacy_guard.check(selections, self.catalog)?;
        }

        let mut has_inclusions = false;
        let mut included = HashSet::new();
        let mut excluded = HashSet::new();
        let mut unmatched = Vec::new();
        for selection in selections.iter() {
            let matches = match Self::expand(self.catalog, &selection.pattern) {
                Some(matches) => matches,
                None => {
                    unmatched.push(selection.clone());
                    Vec::new()
                }
            };
            match selection.operator {
                Operator::Include => {
                    has_inclusions = true;
                    included.extend(matches);
                }
                Operator::Exclude => excluded.extend(matches),
            }
        }

        let benchmarks = self
            .catalog
            .benchmark_names()
            .into_iter()
            .filter(|name| !has_inclusions || included.contains(name))
            .filter(|name| !excluded.contains(name))
            .map(str::to_owned)
            .collect();

        Ok(Resolved {
            benchmarks,
            unmatched,
        })
    }

    ///
    /// Returns the benchmark names matched by `pattern`, or `None` if nothing matches.
    ///
    /// A bare name that is not a benchmark falls back to the group of the same name.
    ///
    fn expand<'s>(catalog: &'s C, pattern: &'s Pattern) -> Option<Vec<&'s str>> {
        match pattern {
            Pattern::Name(name) if catalog.contains_benchmark(name.as_str()) => {
                Some(vec![name.as_str()])
            }
            Pattern::Name(name) | Pattern::Tag(name) => catalog
                .group(name.as_str())
                .map(|members| members.iter().map(String::as_str).collect()),
        }
    }
}

///
/// Resolves a comma-separated selection expression against `catalog`.
///
pub fn resolve<C>(raw: &str, catalog: &C) -> Result<Resolved, Error>
where
    C: Catalog + ?Sized,
{
    Resolver::new(catalog).resolve(raw)
}
