//! Configuration file management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings read from `config.toml`. Missing keys fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// REPL prompt
    pub prompt: String,
    /// auto, always, or never
    pub color: String,
    /// Print each evaluated expression with its result
    pub verbose: bool,
    /// Print per-token evaluation traces
    pub debug: bool,
    /// REPL history location (defaults to the platform data directory)
    pub history_file: Option<PathBuf>,
    pub history_size: usize,
    /// Append every evaluator message to this file
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: "> ".to_string(),
            color: "auto".to_string(),
            verbose: false,
            debug: false,
            history_file: None,
            history_size: 1000,
            log_file: None,
        }
    }
}

fn project_dirs() -> Result<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", "bigcalc").context("Could not determine home directory")
}

/// Get the config directory path
pub fn config_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().to_path_buf())
}

/// Get the default config file path
pub fn config_file_path() -> Result<PathBuf> {
    let mut path = config_dir()?;
    path.push("config.toml");
    Ok(path)
}

/// Default REPL history location
pub fn default_history_path() -> Option<PathBuf> {
    project_dirs()
        .ok()
        .map(|dirs| dirs.data_dir().join("history.txt"))
}

/// Load the configuration.
///
/// An explicit path must exist; the default location may be absent, in
/// which case defaults are used.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load_config_from(path),
        None => {
            let path = config_file_path()?;
            if !path.exists() {
                tracing::debug!("No config file at {:?}, using defaults", path);
                return Ok(Config::default());
            }
            load_config_from(&path)
        }
    }
}

/// Load the configuration from a specific file
pub fn load_config_from(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    tracing::debug!("Loaded config from {:?}", path);
    Ok(config)
}

/// Ensure the parent directory of `path` exists
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory: {:?}", dir))?;
        }
    }
    Ok(())
}
