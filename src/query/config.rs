use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use zipgeo::Format;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    pub dataset: Option<DatasetConfig>,
    #[serde(default)]
    pub query: QueryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    pub path: PathBuf,
    pub format: Format,
}

#[derive(Debug, Deserialize, Clone)]
pub struct QueryConfig {
    /// Radius used when `radius` is given no explicit miles
    #[serde(default = "default_radius")]
    pub default_radius: f64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_radius: default_radius(),
        }
    }
}

fn default_radius() -> f64 {
    10.0
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}
