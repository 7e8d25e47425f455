// src/config/validate.rs

use crate::config::model::{LauncherConfig, RawConfigFile};
use crate::errors::{LaunchError, Result};

impl TryFrom<RawConfigFile> for LauncherConfig {
    type Error = LaunchError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_config(&raw)?;

        let interpreter = raw
            .launcher
            .interpreter
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(LauncherConfig::new_unchecked(interpreter, raw.launcher.script))
    }
}

/// Check the invariants a raw config must satisfy before it can be used.
pub fn validate_config(cfg: &RawConfigFile) -> Result<()> {
    if cfg.launcher.script.as_os_str().is_empty() {
        return Err(LaunchError::ConfigError(
            "[launcher].script must not be empty".to_string(),
        ));
    }
    Ok(())
}
