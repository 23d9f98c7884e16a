use log::debug;
use serde::Deserialize;
use std::fs::read_to_string;
use std::io;
use thiserror::Error;

use crate::models::Tile;

/// Board used when no config file names one.
pub const DEFAULT_TILES: [Tile; 7] = [
  Tile::new(6, 1),
  Tile::new(4, 3),
  Tile::new(5, 1),
  Tile::new(3, 4),
  Tile::new(1, 1),
  Tile::new(3, 4),
  Tile::new(1, 2),
];

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("unable to read config file {path}: {source}")]
  Read { path: String, source: io::Error },

  #[error("invalid config file {path}: {source}")]
  Parse { path: String, source: serde_yaml::Error },
}

/// ```yaml
/// default_tiles:
///   - [6, 1]
///   - [4, 3]
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Root {
  pub default_tiles: Option<Vec<Tile>>,
}

impl Root {
  pub fn load(path: &str) -> Result<Root, ConfigError> {
    let config_str = read_to_string(path).map_err(|source| ConfigError::Read {
      path: path.to_string(),
      source,
    })?;
    let root = Root::from_yaml(&config_str).map_err(|source| ConfigError::Parse {
      path: path.to_string(),
      source,
    })?;
    debug!("Loaded config {}: {:?}", path, root);
    Ok(root)
  }

  pub fn from_yaml(config_str: &str) -> Result<Root, serde_yaml::Error> {
    serde_yaml::from_str(config_str)
  }

  pub fn defaults(&self) -> Vec<Tile> {
    match &self.default_tiles {
      Some(tiles) => tiles.clone(),
      None => DEFAULT_TILES.to_vec(),
    }
  }
}

/// Loads the config at `path`, or the built-in one when there is none.
pub fn load_defaults(path: Option<&str>) -> Result<Vec<Tile>, ConfigError> {
  match path {
    Some(path) => Ok(Root::load(path)?.defaults()),
    None => Ok(Root::default().defaults()),
  }
}
