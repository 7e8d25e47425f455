// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod exit_codes;
pub mod fs;
pub mod logging;

use std::sync::Arc;

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::load_and_validate;
use crate::errors::Result;
use crate::exec::{ProcessRunner, ProcessSpawner, ResolvedCommand, TokioSpawner};
use crate::fs::{FileSystem, RealFileSystem};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (file + CLI overrides)
/// - the process runner
/// - `--esplaunch-dry-run` reporting
///
/// Returns the exit code the launcher should terminate with.
pub async fn run(args: CliArgs) -> Result<i32> {
    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
    let config = load_and_validate(fs.as_ref(), args.config.as_deref(), &args.overrides())?;
    let runner = ProcessRunner::with_parts(config, TokioSpawner, fs);

    if args.dry_run {
        print_dry_run(&runner, args.tool_args);
        return Ok(exit_codes::SUCCESS);
    }

    runner.run(args.tool_args).await
}

/// Dry-run output: the resolved command and whether the script is present.
fn print_dry_run<S: ProcessSpawner>(runner: &ProcessRunner<S>, tool_args: Vec<String>) {
    let command = ResolvedCommand::build(runner.config(), tool_args);
    let status = if runner.executable_exists() {
        "found"
    } else {
        "missing"
    };

    println!("esplaunch dry-run");
    println!("  script: {} ({status})", runner.config().script().display());
    println!("  command: {}", command.display());

    debug!("dry-run complete (no execution)");
}
