//! Entry point for the `hello-keith` checker.

use std::io;
use std::process::ExitCode;

use hello_keith::{run, CheckerConfig, Invocation};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Silent unless RUST_LOG is set; stderr carries the verdict.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let result = Invocation::from_args(std::env::args_os()).and_then(|invocation| {
        run(&invocation, &CheckerConfig::default(), io::stdin().lock(), io::stdout().lock())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "invocation failed");
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
