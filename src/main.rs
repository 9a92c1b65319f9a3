//! Smoke-test CLI for the mentorship platform REST API
//!
//! Runs short end-to-end scenarios against a deployed instance of the
//! platform and reports pass/fail per scenario.

use clap::Parser;
use smoketest::commands::Commands;
use smoketest::{cli, common};

#[derive(Parser)]
#[command(name = "smoketest", about = "Black-box smoke tests for the mentorship platform API")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    common::logging::init_cli();

    let cli = Cli::parse();

    if let Err(e) = cli::dispatch(cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
