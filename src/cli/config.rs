use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Loaded CLI configuration.
///
/// All fields are optional; a missing config file behaves like an empty
/// one. Command-line flags always win over configured values.
#[derive(Debug, Default)]
pub struct CliConfig {
    data: RawConfig,
}

impl CliConfig {
    /// Load from `explicit` if given, otherwise from the default
    /// location. A path that does not exist yields defaults; a file that
    /// exists but does not parse is a hard error naming the path.
    pub fn load(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = explicit.or_else(default_config_path);
        let data = match path {
            Some(config_path) if config_path.exists() => read_file(&config_path)?,
            _ => RawConfig::default(),
        };
        Ok(Self { data })
    }

    /// Graph file used when `reach` is invoked without a path.
    pub fn default_graph_path(&self) -> Option<&PathBuf> {
        self.data.graph.default_path.as_ref()
    }

    /// Configured color theme name, if any.
    pub fn theme(&self) -> Option<&str> {
        self.data.theme.as_deref()
    }
}

fn read_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    graph: GraphSection,
    #[serde(default)]
    theme: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct GraphSection {
    #[serde(rename = "default")]
    default_path: Option<PathBuf>,
}

/// Failure while reading or parsing the CLI config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read CLI config {path}: {source}")]
    Read {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The config file is not valid TOML for the expected shape.
    #[error("failed to parse CLI config {path}: {source}")]
    Parse {
        /// Config file path.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}

/// Default on-disk location: `<config_dir>/senda/cli.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("senda").join("cli.toml"))
}
