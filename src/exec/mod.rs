// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`command`] builds the `ResolvedCommand` (interpreter, script, args).
//! - [`spawner`] provides the `ProcessSpawner` trait and the production
//!   `TokioSpawner`; tests can substitute their own implementation.
//! - [`relay`] pumps one child pipe, line by line, into one parent stream.
//! - [`runner`] ties it together: existence check, spawn, concurrent relay
//!   of both pipes, and exit-code propagation.

pub mod command;
pub mod relay;
pub mod runner;
pub mod spawner;

pub use command::ResolvedCommand;
pub use runner::{ProcessRunner, RunReport};
pub use spawner::{ProcessSpawner, TokioSpawner};
