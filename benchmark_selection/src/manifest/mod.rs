//!
//! The benchmark manifest.
//!

pub mod benchmark;
pub mod error;
pub mod file;


use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::path::Path;

use crate::catalog::Catalog;
use crate::identifier::check_name;
use crate::identifier::Mode;
use crate::resolver::Resolver;
use crate::selection::Selection;

use self::benchmark::Benchmark;
use self::error::Error;
use self::file::File;

///
/// The benchmark manifest.
///
/// Holds the benchmarks in their registration order and the fully resolved
/// membership of every tag and group.
///
#[derive(Debug, Clone)]
pub struct Manifest {
    /// The benchmarks in the canonical order.
    benchmarks: Vec<Benchmark>,
    /// The benchmark positions by name.
    index: HashMap<String, usize>,
    /// The tag and group members.
    groups: BTreeMap<String, BTreeSet<String>>,
}

impl Manifest {
    /// The manifest file name looked up in a suite directory.
    pub const FILE_NAME: &'static str = "manifest.yaml";

    /// The implicit group containing every benchmark.
    pub const GROUP_ALL: &'static str = "all";

    /// The group selected when the user does not ask for anything else.
    pub const GROUP_DEFAULT: &'static str = "default";

    ///
    /// Validates the benchmarks and resolves the group definitions.
    ///
    /// Group definitions are lists of selection tokens, resolved with the same
    /// policy as user selections. An empty definition yields an empty group.
    ///
    pub fn new(
        benchmarks: Vec<Benchmark>,
        definitions: BTreeMap<String, Vec<String>>,
    ) -> Result<Self, Error> {
        let mut index = HashMap::with_capacity(benchmarks.len());
        let mut groups: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (position, benchmark) in benchmarks.iter().enumerate() {
            check_name(benchmark.name.as_str(), Mode::NUMERIC)?;
            if index.insert(benchmark.name.clone(), position).is_some() {
                return Err(Error::DuplicateBenchmark {
                    name: benchmark.name.clone(),
                });
            }

            for tag in benchmark.tags.iter() {
                check_name(tag.as_str(), Mode::STRICT)?;
                if tag == Self::GROUP_ALL {
                    return Err(Error::ReservedGroup { name: tag.clone() });
                }
                groups
                    .entry(tag.clone())
                    .or_default()
                    .insert(benchmark.name.clone());
            }
        }

        let mut parsed = BTreeMap::new();
        for (name, definition) in definitions.into_iter() {
            check_name(name.as_str(), Mode::STRICT)?;
            if name == Self::GROUP_ALL {
                return Err(Error::ReservedGroup { name });
            }
            if groups.contains_key(name.as_str()) {
                return Err(Error::GroupConflict { name });
            }
            let selections = Selection::parse_tokens(definition)?;
            parsed.insert(name, selections);
        }

        let all: BTreeSet<String> = benchmarks
            .iter()
            .map(|benchmark| benchmark.name.clone())
            .collect();
        if !groups.contains_key(Self::GROUP_DEFAULT) && !parsed.contains_key(Self::GROUP_DEFAULT) {
            groups.insert(Self::GROUP_DEFAULT.to_owned(), all.clone());
        }
        groups.insert(Self::GROUP_ALL.to_owned(), all);

        let mut manifest = Self {
            benchmarks,
            index,
            groups,
        };
        for name in parsed.keys() {
            manifest.resolve_group(name.as_str(), &parsed, &mut Vec::new())?;
        }
        Ok(manifest)
    }

    ///
    /// Parses a YAML manifest.
    ///
    pub fn from_yaml(text: &str) -> Result<Self, Error> {
        let file: File = serde_yaml::from_str(text).map_err(|error| Error::Parsing { error })?;
        Self::new(file.benchmarks, file.groups)
    }

    ///
    /// Returns the benchmarks in the canonical order.
    ///
    pub fn benchmarks(&self) -> &[Benchmark] {
        self.benchmarks.as_slice()
    }

    ///
    /// Returns the benchmark with the specified name.
    ///
    pub fn get(&self, name: &str) -> Option<&Benchmark> {
        self.index
            .get(name)
            .map(|position| &self.benchmarks[*position])
    }

    ///
    /// Resolves the group `name` and the explicit groups it references.
    ///
    fn resolve_group(
        &mut self,
        name: &str,
        definitions: &BTreeMap<String, Vec<Selection>>,
        chain: &mut Vec<String>,
    ) -> Result<(), Error> {
        if self.groups.contains_key(name) {
            return Ok(());
        }
        if let Some(position) = chain.iter().position(|link| link == name) {
            let mut cycle = chain[position..].to_vec();
            cycle.push(name.to_owned());
            return Err(Error::GroupCycle {
                group: name.to_owned(),
                cycle: cycle.join(" -> "),
            });
        }
        let selections = match definitions.get(name) {
            Some(selections) => selections,
            None => return Ok(()),
        };

        chain.push(name.to_owned());
        for selection in selections.iter() {
            let reference = selection.pattern.identifier();
            let is_group_reference =
                selection.pattern.is_tag() || !self.contains_benchmark(reference);
            if is_group_reference && definitions.contains_key(reference) {
                self.resolve_group(reference, definitions, chain)?;
            }
        }
        chain.pop();

        let members = if selections.is_empty() {
            BTreeSet::new()
        } else {
            let resolved = Resolver::new(&*self).resolve_selections(selections)?;
            if let Some(selection) = resolved.unmatched.first() {
                return Err(Error::UnknownMember {
                    group: name.to_owned(),
                    member: selection.to_string(),
                });
            }
            resolved.benchmarks.into_iter().collect()
        };
        self.groups.insert(name.to_owned(), members);
        Ok(())
    }
}

impl Catalog for Manifest {
    fn benchmark_names(&self) -> Vec<&str> {
        self.benchmarks
            .iter()
            .map(|benchmark| benchmark.name.as_str())
            .collect()
    }

    fn contains_benchmark(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    fn group_names(&self) -> Vec<&str> {
        self.groups.keys().map(String::as_str).collect()
    }

    fn group(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.groups.get(name)
    }
}

impl std::str::FromStr for Manifest {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::from_yaml(string)
    }
}

impl TryFrom<&Path> for Manifest {
    type Error = Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let path = if path.is_dir() {
            path.join(Self::FILE_NAME)
        } else {
            path.to_path_buf()
        };
        let text = std::fs::read_to_string(path.as_path())
            .map_err(|error| Error::Reading { error, path })?;
        Self::from_yaml(text.as_str())
    }
}
