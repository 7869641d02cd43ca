use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::edge::VertexId;
use crate::error::Result;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Yaml,
}

/**
 * Run settings, read from a YAML file. Any key that is left out takes its
 * default, and command-line flags take precedence over the file.
 */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Edge-list file, one `from,to[,weight]` record per line.
    pub input: PathBuf,
    /// Build a directed graph (the default), instead of inserting each edge
    /// both ways.
    pub directed: bool,
    /// Start vertex for the bipartite check.
    pub origin: VertexId,
    pub log_level: String,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("couplesData.csv"),
            directed: true,
            origin: 0,
            log_level: "info".to_string(),
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn missing_keys_take_defaults() {
        let config = Config::from_yaml("origin: 7\n").unwrap();
        assert!(config.directed);
        assert_eq!(config.origin, 7);
        assert_eq!(config.input, PathBuf::from("couplesData.csv"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn parses_every_key() {
        let text = "input: data/pairs.csv\ndirected: false\norigin: 3\n\
                    log_level: trace\nformat: yaml\n";
        let config = Config::from_yaml(text).unwrap();
        assert_eq!(config.input, PathBuf::from("data/pairs.csv"));
        assert!(!config.directed);
        assert_eq!(config.origin, 3);
        assert_eq!(config.log_level, "trace");
        assert_eq!(config.format, OutputFormat::Yaml);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_yaml("undirected: true\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
