//! Locating and reading the CLI's `config.toml`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use erlay::config::AppConfig;

use crate::ErlayCliError;

/// Config file next to the working directory.
const LOCAL_CONFIG: &str = "erlay/config.toml";

/// Reasons a config file was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Where a config file was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Explicit,
    Local,
    User,
}

/// Resolves the layout configuration for a run.
///
/// A path given on the command line must exist. Without one, the first of
/// `erlay/config.toml` and the user's config directory that holds a file
/// wins; if neither does, [`AppConfig::default`] is used.
///
/// # Errors
///
/// Returns [`ConfigError`] for a missing explicit file, invalid TOML or
/// out-of-range values, and an I/O error when the file cannot be read.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ErlayCliError> {
    let Some((origin, path)) = locate(explicit_path.as_ref().map(AsRef::as_ref)) else {
        debug!("No configuration file found, using defaults");
        return Ok(AppConfig::default());
    };

    info!(origin:?, path = path.display().to_string(); "Loading configuration");
    read_config(&path)
}

fn locate(explicit_path: Option<&Path>) -> Option<(Origin, PathBuf)> {
    if let Some(path) = explicit_path {
        return Some((Origin::Explicit, path.to_path_buf()));
    }

    let local = PathBuf::from(LOCAL_CONFIG);
    if local.is_file() {
        return Some((Origin::Local, local));
    }

    let Some(dirs) = ProjectDirs::from("com", "erlay", "erlay") else {
        debug!("No user config directory on this platform");
        return None;
    };
    let user = dirs.config_dir().join("config.toml");
    if user.is_file() {
        return Some((Origin::User, user));
    }
    debug!(path = user.display().to_string(); "No user configuration file");
    None
}

fn read_config(path: &Path) -> Result<AppConfig, ErlayCliError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config
        .validate()
        .map_err(|e| ConfigError::Validation(e.to_string()))?;
    Ok(config)
}
