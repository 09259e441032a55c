//! simeval - Entry Point
//!
//! Lives in the `simeval` facade crate next to the library so that the
//! binary and the public API share one set of re-exports.

use clap::Parser;
use simeval::cli::{Cli, run};
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Configuration errors can occur before a subscriber exists
            if tracing::dispatcher::has_been_set() {
                error!(error = %e, "simeval failed");
            } else {
                eprintln!("simeval failed: {e}");
            }
            ExitCode::FAILURE
        }
    }
}
