use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pick::PickParams;
use crate::resource::ResourceCounts;
use crate::topology::{TopologyError, TopologyParams};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("couldn't read config from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed config")]
    Json(#[from] serde_json::Error),
    #[error("invalid topology config")]
    Topology(#[from] TopologyError),
    #[error("invalid pick config: {0}")]
    Pick(String),
}

/// Everything needed to deterministically set up a game.
///
/// Every field may be left out of a config file, in which case
/// it takes its default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Seeds the terrain and number shuffle.
    pub seed: u64,
    pub topology: TopologyParams,
    pub pick: PickParams,
    /// What the player starts out holding.
    pub starting_resources: ResourceCounts,
}

impl Default for BoardConfig {
    fn default() -> BoardConfig {
        BoardConfig {
            seed: 14,
            topology: TopologyParams::default(),
            pick: PickParams::default(),
            starting_resources: ResourceCounts::default(),
        }
    }
}

impl BoardConfig {
    pub fn load(path: &Path) -> Result<BoardConfig, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        BoardConfig::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<BoardConfig, ConfigError> {
        let config: BoardConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.topology.validate()?;
        self.pick.validate().map_err(ConfigError::Pick)
    }
}
