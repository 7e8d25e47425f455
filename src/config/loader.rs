// src/config/loader.rs

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigOverrides, LauncherConfig, RawConfigFile};
use crate::errors::{LaunchError, Result};
use crate::fs::FileSystem;

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** apply overrides
/// or validate. Use [`load_and_validate`] for that.
pub fn load_from_path(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs.read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Resolve the effective launcher configuration.
///
/// - With an explicit `config_path`, that file must exist.
/// - Otherwise [`default_config_path`] is read if present, and the built-in
///   defaults are used if not.
/// - `overrides` (from the command line) are applied last, then the result
///   is validated.
pub fn load_and_validate(
    fs: &dyn FileSystem,
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<LauncherConfig> {
    let mut raw = match config_path {
        Some(path) => {
            if !fs.is_file(path) {
                return Err(LaunchError::ConfigError(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
            load_from_path(fs, path)?
        }
        None => {
            let path = default_config_path();
            if fs.is_file(&path) {
                debug!(path = %path.display(), "loading default config file");
                load_from_path(fs, &path)?
            } else {
                RawConfigFile::default()
            }
        }
    };

    raw.apply_overrides(overrides);
    LauncherConfig::try_from(raw)
}

/// Config file picked up from the working directory when `--esplaunch-config` is not given.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Esplaunch.toml")
}
