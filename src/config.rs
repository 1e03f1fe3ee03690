//! Simulation configuration, read from an optional TOML file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::ConfigError;
use crate::inventory::DEFAULT_CAPACITY;

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "craftsim.toml";

/// Environment variable pointing at an alternative config file
pub const CONFIG_ENV: &str = "CRAFTSIM_CONFIG";

fn default_input() -> PathBuf {
    PathBuf::from("input.txt")
}

fn default_output() -> PathBuf {
    PathBuf::from("output.txt")
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimConfig {
    /// Script to read
    #[serde(default = "default_input")]
    pub input: PathBuf,
    /// Where the report goes; `-` means stdout
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Slots the inventory starts with
    #[serde(default = "default_capacity")]
    pub initial_capacity: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            initial_capacity: default_capacity(),
        }
    }
}

impl SimConfig {
    pub fn from_toml_str(path: &Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path`, falling back to defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let config = Self::from_toml_str(path, &content)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Config path from the environment, or the default file name
    pub fn default_path() -> PathBuf {
        std::env::var(CONFIG_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Whether the report should go to stdout instead of a file
    pub fn writes_to_stdout(&self) -> bool {
        self.output.as_os_str() == "-"
    }
}
