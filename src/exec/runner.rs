// src/exec/runner.rs

//! The process runner: existence check, spawn, relay, exit code.

use std::process::ExitStatus;
use std::sync::Arc;

use tokio::io::AsyncWrite;
use tracing::{debug, info, warn};

use crate::config::LauncherConfig;
use crate::errors::{LaunchError, Result, StreamKind};
use crate::fs::{FileSystem, RealFileSystem};

use super::command::ResolvedCommand;
use super::relay::relay_lines;
use super::spawner::{ProcessSpawner, TokioSpawner};

/// What a completed run produced.
///
/// The writers are handed back so callers relaying into buffers can inspect
/// what was written.
#[derive(Debug)]
pub struct RunReport<O, E> {
    pub exit_code: i32,
    pub stdout_lines: u64,
    pub stderr_lines: u64,
    pub stdout: O,
    pub stderr: E,
}

/// Spawns the configured tool and relays its output.
///
/// Stateless across calls: every `run` re-checks the script, rebuilds the
/// command and owns its child exclusively until it has exited and both of
/// its pipes are drained.
#[derive(Debug, Clone)]
pub struct ProcessRunner<S = TokioSpawner> {
    config: LauncherConfig,
    spawner: S,
    fs: Arc<dyn FileSystem>,
}

impl ProcessRunner<TokioSpawner> {
    pub fn new(config: LauncherConfig) -> Self {
        Self::with_parts(config, TokioSpawner, Arc::new(RealFileSystem))
    }
}

impl<S: ProcessSpawner> ProcessRunner<S> {
    pub fn with_parts(config: LauncherConfig, spawner: S, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            config,
            spawner,
            fs,
        }
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    /// Whether the configured script is present right now.
    pub fn executable_exists(&self) -> bool {
        self.fs.exists(self.config.script())
    }

    /// Run the tool with `args`, relaying to this process's stdout/stderr.
    ///
    /// Returns the child's exit code.
    pub async fn run(&self, args: Vec<String>) -> Result<i32> {
        let report = self
            .run_with(args, tokio::io::stdout(), tokio::io::stderr())
            .await?;
        Ok(report.exit_code)
    }

    /// Run the tool with `args`, relaying its stdout into `stdout` and its
    /// stderr into `stderr`.
    ///
    /// Completes only once the child has exited and both pipes have hit
    /// end-of-stream. If either relay fails, the child is killed and the
    /// error returned; lines already written stay written.
    pub async fn run_with<O, E>(
        &self,
        args: Vec<String>,
        mut stdout: O,
        mut stderr: E,
    ) -> Result<RunReport<O, E>>
    where
        O: AsyncWrite + Unpin,
        E: AsyncWrite + Unpin,
    {
        let script = self.config.script();
        if !self.executable_exists() {
            debug!(path = %script.display(), "target executable not found; not spawning");
            return Err(LaunchError::ExecutableNotFound {
                path: script.to_path_buf(),
            });
        }

        if args.is_empty() {
            warn!("no arguments provided; using the tool's default operation");
        }

        let command = ResolvedCommand::build(&self.config, args);
        let program = command.program().to_string_lossy().into_owned();
        info!(cmd = %command.display(), "starting tool process");

        let mut child = self
            .spawner
            .spawn(&command)
            .map_err(|source| LaunchError::SpawnFailed {
                program: program.clone(),
                source,
            })?;
        debug!(pid = ?child.id(), "tool process spawned");

        let child_stdout = child.stdout.take().ok_or_else(|| missing_pipe(StreamKind::Stdout))?;
        let child_stderr = child.stderr.take().ok_or_else(|| missing_pipe(StreamKind::Stderr))?;

        // Both pipes are drained concurrently with the wait, so a child that
        // floods one stream can never block on a full pipe while we sit on
        // the other. An error in any branch drops `child`, which kills it.
        let joined = tokio::try_join!(
            async { child.wait().await.map_err(LaunchError::Wait) },
            relay_lines(child_stdout, &mut stdout, StreamKind::Stdout),
            relay_lines(child_stderr, &mut stderr, StreamKind::Stderr),
        );

        let (status, stdout_lines, stderr_lines) = match joined {
            Ok(parts) => parts,
            Err(err) => {
                debug!(program = %program, error = %err, "tool relay failed; killing child");
                return Err(err);
            }
        };

        let exit_code = exit_code_of(status);
        info!(
            exit_code,
            success = status.success(),
            stdout_lines,
            stderr_lines,
            "tool process exited"
        );

        Ok(RunReport {
            exit_code,
            stdout_lines,
            stderr_lines,
            stdout,
            stderr,
        })
    }
}

fn missing_pipe(stream: StreamKind) -> LaunchError {
    LaunchError::StreamRead {
        stream,
        source: std::io::Error::other(format!("child {stream} was not piped")),
    }
}

/// Numeric exit code for `status`.
///
/// On Unix a child killed by a signal reports `128 + signal`, the same value
/// a shell would show. Anything else without a code maps to `-1`.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    -1
}

#[cfg(all(test, unix))]
mod tests {
    use std::os::unix::process::ExitStatusExt;

    use super::*;

    #[test]
    fn normal_exit_codes_pass_through() {
        assert_eq!(exit_code_of(ExitStatus::from_raw(0)), 0);
        assert_eq!(exit_code_of(ExitStatus::from_raw(1 << 8)), 1);
        assert_eq!(exit_code_of(ExitStatus::from_raw(37 << 8)), 37);
    }

    #[test]
    fn signals_map_to_shell_convention() {
        // Raw wait status 9 means "terminated by SIGKILL".
        assert_eq!(exit_code_of(ExitStatus::from_raw(9)), 137);
    }
}
