// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Every argument is forwarded to the tool, including `-h`, `--help` and
//! `--version`. The launcher's own options all carry an `--esplaunch-`
//! prefix so they cannot collide with the tool's, and must come before the
//! first forwarded argument. Options that take a path or program can also be
//! set through `ESPLAUNCH_*` environment variables.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::ConfigOverrides;

/// Command-line arguments for `esplaunch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "esplaunch",
    version,
    about = "Run a bundled tool script, relaying its output and exit code.",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct CliArgs {
    /// Print the launcher's help (plain `--help` goes to the tool).
    #[arg(long = "esplaunch-help", action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Print the launcher's version (plain `--version` goes to the tool).
    #[arg(long = "esplaunch-version", action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Path to a config file (TOML).
    ///
    /// Default: `Esplaunch.toml` in the current working directory, if present.
    #[arg(long = "esplaunch-config", env = "ESPLAUNCH_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Interpreter used to run the script (default: `python`).
    #[arg(
        long = "esplaunch-interpreter",
        env = "ESPLAUNCH_INTERPRETER",
        value_name = "PROG",
        conflicts_with = "no_interpreter"
    )]
    pub interpreter: Option<String>,

    /// Execute the script directly instead of through an interpreter.
    #[arg(long = "esplaunch-no-interpreter")]
    pub no_interpreter: bool,

    /// Path to the tool's entry script, relative to the working directory.
    #[arg(long = "esplaunch-script", env = "ESPLAUNCH_SCRIPT", value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `ESPLAUNCH_LOG` or a default level will be used.
    #[arg(long = "esplaunch-log-level", value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the command that would run, but don't start it.
    #[arg(long = "esplaunch-dry-run")]
    pub dry_run: bool,

    /// Arguments forwarded verbatim to the tool.
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub tool_args: Vec<String>,
}

impl CliArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            interpreter: self.interpreter.clone(),
            no_interpreter: self.no_interpreter,
            script: self.script.clone(),
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
