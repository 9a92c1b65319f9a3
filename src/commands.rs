//! CLI command definitions
//!
//! Defines the clap commands for the smoke-test CLI.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Run smoke-test scenarios against the configured API
    Run {
        /// Scenario names to run (all scenarios when omitted)
        scenarios: Vec<String>,

        /// Path to the configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Base URL of the API under test
        #[arg(long)]
        base_url: Option<String>,

        /// Forwarding proxy for all requests (e.g. http://127.0.0.1:1080)
        #[arg(long)]
        proxy: Option<String>,

        /// Per-request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Verbose output
        #[arg(long, short)]
        verbose: bool,
    },

    /// List available scenarios
    List,

    /// Probe API connectivity via the health endpoint
    Check {
        /// Path to the configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Base URL of the API under test
        #[arg(long)]
        base_url: Option<String>,

        /// Forwarding proxy for all requests
        #[arg(long)]
        proxy: Option<String>,

        /// Per-request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },
}
