// src/config/mod.rs

//! Configuration loading and validation for esplaunch.
//!
//! Responsibilities:
//! - Define the TOML-backed data model and CLI overrides (`model.rs`).
//! - Load an optional config file (`loader.rs`).
//! - Validate the merged result into a `LauncherConfig` (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{ConfigOverrides, LauncherConfig, LauncherSection, RawConfigFile};
pub use validate::validate_config;
