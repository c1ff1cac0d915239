use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::UnisearchError;

const CONFIG_DIR: &str = "unisearch";
const CONFIG_FILE: &str = "config.toml";

/// `~/.config/unisearch/config.toml`
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration
///
/// With an explicit path the file must exist. Without one the default
/// location is tried and a missing file yields the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, UnisearchError> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }

    let Some(path) = config_path() else {
        log::warn!("No home directory, using default configuration");
        return Ok(Config::default());
    };

    match fs::read_to_string(&path) {
        Ok(contents) => parse_config(&contents, &path),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Config::default()),
        Err(source) => Err(UnisearchError::ConfigRead { path, source }),
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, UnisearchError> {
    let contents = fs::read_to_string(path).map_err(|source| UnisearchError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&contents, path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config, UnisearchError> {
    toml::from_str(contents).map_err(|source| UnisearchError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
