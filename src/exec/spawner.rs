// src/exec/spawner.rs

//! Pluggable process spawning.
//!
//! The runner asks a `ProcessSpawner` for a child instead of calling
//! `tokio::process::Command` directly. Production uses [`TokioSpawner`];
//! tests can wrap it to record calls or to prove no process was started.

use std::io;
use std::process::Stdio;

use tokio::process::{Child, Command};

use super::command::ResolvedCommand;

/// Trait abstracting how a resolved command becomes a running child.
///
/// Implementations must return a child whose stdout and stderr are piped;
/// the runner takes both pipes and drains them.
pub trait ProcessSpawner: Send + Sync {
    fn spawn(&self, command: &ResolvedCommand) -> io::Result<Child>;
}

/// Real spawner used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSpawner;

impl ProcessSpawner for TokioSpawner {
    fn spawn(&self, command: &ResolvedCommand) -> io::Result<Child> {
        let mut cmd = Command::new(command.program());
        cmd.args(command.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        cmd.spawn()
    }
}

impl<S: ProcessSpawner + ?Sized> ProcessSpawner for &S {
    fn spawn(&self, command: &ResolvedCommand) -> io::Result<Child> {
        (**self).spawn(command)
    }
}
