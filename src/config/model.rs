// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

/// Interpreter used when nothing else is configured.
pub const DEFAULT_INTERPRETER: &str = "python";

/// Location of the target tool, relative to the working directory.
pub const DEFAULT_SCRIPT: &str = "tools/esptool/esptool.py";

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [launcher]
/// interpreter = "python3"
/// script = "tools/esptool/esptool.py"
/// ```
///
/// The whole file and every key are optional. Setting `interpreter = ""`
/// runs the script directly as an executable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub launcher: LauncherSection,
}

/// `[launcher]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LauncherSection {
    /// Program that runs the script. `None` (or an empty string in TOML)
    /// means the script is executed directly.
    #[serde(default = "default_interpreter")]
    pub interpreter: Option<String>,

    /// Path to the tool's entry script.
    #[serde(default = "default_script")]
    pub script: PathBuf,
}

fn default_interpreter() -> Option<String> {
    Some(DEFAULT_INTERPRETER.to_string())
}

fn default_script() -> PathBuf {
    PathBuf::from(DEFAULT_SCRIPT)
}

impl Default for LauncherSection {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            script: default_script(),
        }
    }
}

/// Command-line overrides layered on top of the file (or the defaults).
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub interpreter: Option<String>,
    pub no_interpreter: bool,
    pub script: Option<PathBuf>,
}

impl RawConfigFile {
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if overrides.no_interpreter {
            self.launcher.interpreter = None;
        } else if let Some(interpreter) = &overrides.interpreter {
            self.launcher.interpreter = Some(interpreter.clone());
        }

        if let Some(script) = &overrides.script {
            self.launcher.script = script.clone();
        }
    }
}

/// Validated launcher configuration.
///
/// Only constructible through `TryFrom<RawConfigFile>` (see `validate.rs`)
/// or [`LauncherConfig::new_unchecked`] for callers that already know the
/// values are sane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    interpreter: Option<String>,
    script: PathBuf,
}

impl LauncherConfig {
    pub fn new_unchecked(interpreter: Option<String>, script: impl Into<PathBuf>) -> Self {
        Self {
            interpreter,
            script: script.into(),
        }
    }

    pub fn interpreter(&self) -> Option<&str> {
        self.interpreter.as_deref()
    }

    pub fn script(&self) -> &std::path::Path {
        &self.script
    }
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self::new_unchecked(default_interpreter(), default_script())
    }
}
