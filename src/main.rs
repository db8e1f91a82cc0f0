//! tictactoe CLI entry point

use std::process;
use tictactoe::RouterError;
use tictactoe::cli::common::EXIT_SUCCESS;
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr so stdout stays byte-for-byte reproducible
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(RouterError::Usage(err)) => {
            // clap renders usage errors to stderr itself; if stderr is gone there is nowhere to report
            err.print().ok();
            err.exit_code()
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };

    process::exit(exit_code);
}

fn run() -> Result<(), RouterError> {
    let router = tictactoe::router()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    router.dispatch(std::env::args_os(), &mut out)
}
