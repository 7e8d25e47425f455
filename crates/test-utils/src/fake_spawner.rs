use std::ffi::OsString;
use std::io;
use std::sync::{Arc, Mutex};

use esplaunch::exec::{ProcessSpawner, ResolvedCommand, TokioSpawner};
use tokio::process::Child;

/// A spawner that records every command it is asked to start and then
/// delegates to the real `TokioSpawner`.
///
/// Clones share the same record, so a test can keep one handle while the
/// runner owns the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingSpawner {
    calls: Arc<Mutex<Vec<Vec<OsString>>>>,
}

impl RecordingSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Argument vectors of every spawn attempt, in order.
    pub fn calls(&self) -> Vec<Vec<OsString>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl ProcessSpawner for RecordingSpawner {
    fn spawn(&self, command: &ResolvedCommand) -> io::Result<Child> {
        self.calls.lock().unwrap().push(command.argv());
        TokioSpawner.spawn(command)
    }
}

/// A spawner that always fails with the given error kind, as if the OS had
/// refused to create the process.
#[derive(Debug, Clone, Copy)]
pub struct FailingSpawner {
    pub kind: io::ErrorKind,
}

impl ProcessSpawner for FailingSpawner {
    fn spawn(&self, _command: &ResolvedCommand) -> io::Result<Child> {
        Err(io::Error::new(self.kind, "spawn refused by test"))
    }
}
