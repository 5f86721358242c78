//! `svcgen --show-config`: print the effective configuration.

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    output.block(&render(config)?)?;
    output.block(&format!(
        "# default file: {}",
        AppConfig::config_path().display()
    ))?;
    Ok(())
}

fn render(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
