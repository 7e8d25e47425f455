// src/main.rs

use std::io::Write;

use esplaunch::errors::Result;
use esplaunch::{cli, logging, run};

#[tokio::main]
async fn main() {
    let code = match run_main().await {
        Ok(code) => code,
        Err(err) => {
            // stderr may already be closed; the exit code must survive that.
            let _ = writeln!(std::io::stderr(), "esplaunch: error: {err}");
            err.exit_code()
        }
    };
    std::process::exit(code);
}

async fn run_main() -> Result<i32> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await
}
