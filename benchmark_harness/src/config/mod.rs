//!
//! The benchmark harness config.
//!

use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

///
/// The benchmark harness config.
///
/// Every field is optional. The command line arguments take precedence.
///
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The benchmark manifest path. Relative paths are resolved against the config file directory.
    pub manifest: Option<PathBuf>,
    /// Whether the subcommands tolerating an empty selection accept it.
    pub allow_no_benchmarks: bool,
    /// The legacy selection compatibility guard settings.
    pub legacy_guard: benchmark_selection::LegacyGuard,
}

impl Config {
    /// The manifest path used if neither the arguments nor the config specify one.
    pub const DEFAULT_MANIFEST_PATH: &'static str = "./benchmarks/manifest.yaml";

    ///
    /// Returns the manifest path, preferring the command line argument.
    ///
    pub fn manifest_path(&self, argument: Option<PathBuf>) -> PathBuf {
        argument
            .or_else(|| self.manifest.clone())
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_MANIFEST_PATH))
    }
}

impl TryFrom<&Path> for Config {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("Config file {path:?} reading: {error}"))?;
        let mut config: Self = serde_json::from_str(text.as_str())
            .map_err(|error| anyhow::anyhow!("Config file {path:?} parsing: {error}"))?;

        if let (Some(manifest), Some(directory)) = (config.manifest.as_mut(), path.parent()) {
            if manifest.is_relative() {
                *manifest = directory.join(manifest.as_path());
            }
        }
        Ok(config)
    }
}
