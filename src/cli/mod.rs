//! CLI command handling
//!
//! Resolves configuration and scenario selections, then dispatches to the
//! runner and formats output.

use std::path::Path;

use colored::Colorize;

use crate::api::ApiClient;
use crate::commands::Commands;
use crate::common::{Config, Error, Result};
use crate::testing::{self, Scenario};

/// Dispatch a CLI command
pub async fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            scenarios,
            config,
            base_url,
            proxy,
            timeout,
            verbose,
        } => {
            let config = load_config(config.as_deref(), base_url, proxy, timeout)?;
            let selected = select_scenarios(&scenarios)?;

            let results = testing::run_scenarios(&selected, &config, verbose).await;
            testing::summarize(&results)
        }

        Commands::List => {
            println!("Available scenarios:");
            for scenario in Scenario::ALL {
                println!(
                    "  {} {}",
                    format!("{:<18}", scenario.name()).bold(),
                    scenario.description()
                );
            }
            Ok(())
        }

        Commands::Check {
            config,
            base_url,
            proxy,
            timeout,
        } => {
            let config = load_config(config.as_deref(), base_url, proxy, timeout)?;
            let client = ApiClient::new(&config)?;
            client.health().await?;
            println!("{} {} is reachable", "✓".green(), config.base_url);
            Ok(())
        }
    }
}

/// Load the config file and apply command-line overrides on top
fn load_config(
    path: Option<&Path>,
    base_url: Option<String>,
    proxy: Option<String>,
    timeout: Option<u64>,
) -> Result<Config> {
    let mut config = Config::load(path)?;
    if let Some(base_url) = base_url {
        config.base_url = base_url;
    }
    if let Some(proxy) = proxy {
        config.proxy = Some(proxy);
    }
    if let Some(timeout) = timeout {
        config.timeout_secs = timeout;
    }
    Ok(config)
}

/// Resolve scenario names to the registry; no names means every scenario
fn select_scenarios(names: &[String]) -> Result<Vec<Scenario>> {
    if names.is_empty() {
        return Ok(Scenario::ALL.to_vec());
    }
    names
        .iter()
        .map(|name| Scenario::parse(name).ok_or_else(|| Error::UnknownScenario(name.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_defaults_to_all() {
        let selected = select_scenarios(&[]).unwrap();
        assert_eq!(selected.len(), Scenario::ALL.len());
    }

    #[test]
    fn test_select_by_name() {
        let names = vec!["login".to_string(), "feedback".to_string()];
        let selected = select_scenarios(&names).unwrap();
        assert_eq!(selected, vec![Scenario::Login, Scenario::Feedback]);
    }

    #[test]
    fn test_select_rejects_unknown() {
        let names = vec!["warp-core".to_string()];
        assert!(matches!(
            select_scenarios(&names),
            Err(Error::UnknownScenario(_))
        ));
    }

    #[test]
    fn test_overrides_apply_on_top_of_file_values() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"http://from-file:5000\"").unwrap();
        writeln!(file, "timeout_secs = 60").unwrap();

        let config = load_config(
            Some(file.path()),
            Some("http://10.1.2.3:5000".to_string()),
            Some("http://127.0.0.1:1080".to_string()),
            Some(5),
        )
        .unwrap();
        assert_eq!(config.base_url, "http://10.1.2.3:5000");
        assert_eq!(config.proxy.as_deref(), Some("http://127.0.0.1:1080"));
        assert_eq!(config.timeout_secs, 5);
    }
}
