#![allow(dead_code)]

use esplaunch::exec::RunReport;
use esplaunch_test_utils::builders::StubTool;

pub use esplaunch_test_utils::{init_tracing, lines, with_timeout, with_timeout_secs};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Run a stub script through `sh`, capturing both relayed streams in memory.
pub async fn run_stub(body: &str, args: &[&str]) -> esplaunch::errors::Result<RunReport<Vec<u8>, Vec<u8>>> {
    init_tracing();
    let stub = StubTool::new(body);
    let args = args.iter().map(|s| s.to_string()).collect();
    stub.runner().run_with(args, Vec::new(), Vec::new()).await
}
