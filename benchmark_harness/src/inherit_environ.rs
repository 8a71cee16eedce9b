//!
//! The environment variables inherited by the benchmark subprocesses.
//!

use benchmark_selection::parse_selections;
use benchmark_selection::split_selections;
use benchmark_selection::Operator;

///
/// The environment variables inherited by the benchmark subprocesses.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InheritEnviron(pub Vec<String>);

impl std::str::FromStr for InheritEnviron {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let names = parse_selections(split_selections(string), |operator, name| match operator {
            Operator::Include => Ok(name.to_owned()),
            Operator::Exclude => {
                anyhow::bail!("Environment variables cannot be excluded: `-{name}`")
            }
        })?;
        Ok(Self(names))
    }
}
