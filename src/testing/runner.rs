//! Scenario execution and reporting
//!
//! Runs scenarios strictly sequentially. A transport failure or violated
//! expectation fails the scenario it occurred in and the runner moves on
//! to the next one.

use colored::Colorize;

use crate::common::{Config, Error, Result};

use super::{scenarios, Scenario};

/// Result of a single scenario run
#[derive(Debug)]
pub struct TestResult {
    pub name: String,
    pub passed: bool,
    pub error: Option<String>,
}

/// Run the given scenarios in order, printing a verdict for each
pub async fn run_scenarios(
    selected: &[Scenario],
    config: &Config,
    verbose: bool,
) -> Vec<TestResult> {
    let mut results = Vec::with_capacity(selected.len());

    for scenario in selected {
        println!(
            "\n{} {}",
            "Running:".blue().bold(),
            scenario.name().white().bold()
        );
        if verbose {
            println!("  {}", scenario.description().dimmed());
            println!("  target: {}", config.base_url.dimmed());
        }

        match scenarios::execute(*scenario, config).await {
            Ok(()) => {
                println!("  {} {}", "✓".green(), "passed".green());
                results.push(TestResult {
                    name: scenario.name().to_string(),
                    passed: true,
                    error: None,
                });
            }
            Err(e) => {
                println!("  {} {}", "✗".red(), e);
                results.push(TestResult {
                    name: scenario.name().to_string(),
                    passed: false,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    results
}

/// Print the pass/fail summary; errors when any scenario failed so the
/// process exits nonzero
pub fn summarize(results: &[TestResult]) -> Result<()> {
    let failed = results.iter().filter(|r| !r.passed).count();

    println!("\n{}", "Summary:".cyan());
    for result in results {
        if result.passed {
            println!("  {} {}", "✓".green(), result.name);
        } else {
            let detail = result.error.as_deref().unwrap_or("failed");
            println!("  {} {}: {}", "✗".red(), result.name, detail.dimmed());
        }
    }
    println!(
        "\n{} passed, {} failed",
        results.len() - failed,
        failed
    );

    if failed == 0 {
        Ok(())
    } else {
        Err(Error::ScenariosFailed {
            failed,
            total: results.len(),
        })
    }
}
