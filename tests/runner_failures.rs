#![cfg(unix)]

mod common;

use std::io;
use std::path::Path;
use std::sync::Arc;

use esplaunch::config::LauncherConfig;
use esplaunch::errors::{LaunchError, StreamKind};
use esplaunch::exec::ProcessRunner;
use esplaunch::exit_codes;
use esplaunch::fs::mock::MockFileSystem;
use esplaunch_test_utils::builders::StubTool;
use esplaunch_test_utils::fake_spawner::{FailingSpawner, RecordingSpawner};
use esplaunch_test_utils::writers::BrokenWriter;

use crate::common::{init_tracing, with_timeout, TestResult};

#[tokio::test]
async fn missing_executable_never_spawns() -> TestResult {
    init_tracing();

    let fs = MockFileSystem::new();
    let spawner = RecordingSpawner::new();
    let runner = ProcessRunner::with_parts(
        LauncherConfig::default(),
        spawner.clone(),
        Arc::new(fs),
    );

    let err = with_timeout(runner.run_with(vec!["chip_id".into()], Vec::new(), Vec::new()))
        .await
        .unwrap_err();

    match &err {
        LaunchError::ExecutableNotFound { path } => {
            assert_eq!(path, Path::new("tools/esptool/esptool.py"));
        }
        other => panic!("expected ExecutableNotFound, got {:?}", other),
    }
    assert_eq!(err.exit_code(), exit_codes::EXECUTABLE_NOT_FOUND);
    assert_eq!(spawner.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn existence_is_rechecked_on_every_run() -> TestResult {
    init_tracing();

    let stub = StubTool::new("echo hi");
    let fs = MockFileSystem::new();
    fs.add_file(stub.script(), "");
    let spawner = RecordingSpawner::new();
    let runner = ProcessRunner::with_parts(stub.config(), spawner.clone(), Arc::new(fs.clone()));

    let report = with_timeout(runner.run_with(Vec::new(), Vec::new(), Vec::new())).await?;
    assert_eq!(report.stdout, b"hi\n");
    assert_eq!(spawner.call_count(), 1);

    fs.remove_file(stub.script());
    let err = with_timeout(runner.run_with(Vec::new(), Vec::new(), Vec::new()))
        .await
        .unwrap_err();
    assert!(matches!(err, LaunchError::ExecutableNotFound { .. }));
    assert_eq!(spawner.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn spawner_sees_the_resolved_command() -> TestResult {
    init_tracing();

    let stub = StubTool::new("exit 0");
    let spawner = RecordingSpawner::new();
    let runner = stub.runner_with(spawner.clone());

    with_timeout(runner.run_with(vec!["-b".into(), "115200".into()], Vec::new(), Vec::new())).await?;

    let calls = spawner.calls();
    assert_eq!(calls.len(), 1);
    let argv: Vec<String> = calls[0]
        .iter()
        .map(|s| s.to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        argv,
        vec![
            "sh".to_string(),
            stub.script().display().to_string(),
            "-b".to_string(),
            "115200".to_string(),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn os_spawn_refusal_is_spawn_failed() -> TestResult {
    init_tracing();

    let stub = StubTool::new("exit 0");
    let runner = stub.runner_with(FailingSpawner {
        kind: io::ErrorKind::PermissionDenied,
    });

    let err = with_timeout(runner.run_with(Vec::new(), Vec::new(), Vec::new()))
        .await
        .unwrap_err();

    match &err {
        LaunchError::SpawnFailed { program, source } => {
            assert_eq!(program, "sh");
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        }
        other => panic!("expected SpawnFailed, got {:?}", other),
    }
    assert_eq!(err.exit_code(), exit_codes::SPAWN_FAILED);
    Ok(())
}

#[tokio::test]
async fn missing_interpreter_is_spawn_failed() -> TestResult {
    init_tracing();

    let stub = StubTool::new("exit 0");
    let config = LauncherConfig::new_unchecked(
        Some("esplaunch-no-such-interpreter".to_string()),
        stub.script(),
    );
    let runner = ProcessRunner::new(config);

    let err = with_timeout(runner.run_with(Vec::new(), Vec::new(), Vec::new()))
        .await
        .unwrap_err();

    match err {
        LaunchError::SpawnFailed { program, source } => {
            assert_eq!(program, "esplaunch-no-such-interpreter");
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        other => panic!("expected SpawnFailed, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn non_executable_script_without_interpreter_is_spawn_failed() -> TestResult {
    init_tracing();

    // Written without the executable bit.
    let stub = StubTool::new("echo never");
    let runner = ProcessRunner::new(stub.direct_config());

    let err = with_timeout(runner.run_with(Vec::new(), Vec::new(), Vec::new()))
        .await
        .unwrap_err();

    match err {
        LaunchError::SpawnFailed { source, .. } => {
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        }
        other => panic!("expected SpawnFailed, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn executable_script_runs_without_interpreter() -> TestResult {
    init_tracing();

    let stub = StubTool::new("echo direct; exit 5").executable();
    let runner = ProcessRunner::new(stub.direct_config());

    let report = with_timeout(runner.run_with(Vec::new(), Vec::new(), Vec::new())).await?;
    assert_eq!(report.exit_code, 5);
    assert_eq!(report.stdout, b"direct\n");
    Ok(())
}

/// True once `pid` has exited (gone, or a zombie awaiting reaping).
#[cfg(target_os = "linux")]
fn process_has_exited(pid: &str) -> bool {
    match std::fs::read_to_string(format!("/proc/{pid}/stat")) {
        Err(_) => true,
        Ok(stat) => stat
            .rsplit_once(')')
            .map(|(_, rest)| rest.trim_start().starts_with('Z'))
            .unwrap_or(false),
    }
}

#[tokio::test]
async fn relay_failure_aborts_the_run_and_kills_the_child() -> TestResult {
    init_tracing();

    let stub = StubTool::new(r#"echo $$ > "$1"; while :; do echo tick; done"#);
    let pid_file = stub.dir().join("child.pid");
    let runner = stub.runner();

    let err = with_timeout(runner.run_with(
        vec![pid_file.display().to_string()],
        BrokenWriter,
        Vec::new(),
    ))
    .await
    .unwrap_err();

    match &err {
        LaunchError::StreamRead { stream, source } => {
            assert_eq!(*stream, StreamKind::Stdout);
            assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
        }
        other => panic!("expected StreamRead, got {:?}", other),
    }
    assert_eq!(err.exit_code(), exit_codes::RELAY_FAILED);

    #[cfg(target_os = "linux")]
    {
        let pid = std::fs::read_to_string(&pid_file)?.trim().to_string();
        with_timeout(async {
            while !process_has_exited(&pid) {
                tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            }
        })
        .await;
    }
    Ok(())
}
