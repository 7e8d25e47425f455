#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use esplaunch::config::LauncherConfig;
use esplaunch::exec::{ProcessRunner, ProcessSpawner};
use esplaunch::fs::RealFileSystem;
use tempfile::TempDir;

/// A throwaway tool: a `sh` script inside a temp dir laid out like
/// `tools/stub/stub.sh`.
///
/// The directory is removed when the `StubTool` is dropped.
pub struct StubTool {
    dir: TempDir,
    script: PathBuf,
}

impl StubTool {
    /// Write a script whose body is `body` (POSIX sh).
    pub fn new(body: &str) -> Self {
        let dir = tempfile::tempdir().expect("creating temp dir for stub tool");
        let script = dir.path().join("tools").join("stub").join("stub.sh");
        fs::create_dir_all(script.parent().expect("script has a parent"))
            .expect("creating stub tool dir");
        fs::write(&script, format!("#!/bin/sh\n{body}\n")).expect("writing stub script");

        Self { dir, script }
    }

    /// Mark the script executable so it can run without an interpreter.
    #[cfg(unix)]
    pub fn executable(self) -> Self {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&self.script, fs::Permissions::from_mode(0o755))
            .expect("chmod stub script");
        self
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn script(&self) -> &Path {
        &self.script
    }

    /// Config that runs the stub through `sh`.
    pub fn config(&self) -> LauncherConfig {
        LauncherConfig::new_unchecked(Some("sh".to_string()), self.script.clone())
    }

    /// Config that executes the stub directly.
    pub fn direct_config(&self) -> LauncherConfig {
        LauncherConfig::new_unchecked(None, self.script.clone())
    }

    pub fn runner(&self) -> ProcessRunner {
        ProcessRunner::new(self.config())
    }

    pub fn runner_with<S: ProcessSpawner>(&self, spawner: S) -> ProcessRunner<S> {
        ProcessRunner::with_parts(self.config(), spawner, Arc::new(RealFileSystem))
    }
}
