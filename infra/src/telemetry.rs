//! Tracing subscriber setup

use tc_shared::config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

use crate::InfrastructureError;

/// Install the global fmt subscriber described by `config`
///
/// `config.level` accepts any `EnvFilter` directive, e.g.
/// `info,tc_core=debug`. Fails if a global subscriber is already set.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), InfrastructureError> {
    let filter = build_filter(&config.level)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.colored)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    result.map_err(|e| InfrastructureError::General(format!("Failed to install tracing subscriber: {}", e)))
}

fn build_filter(level: &str) -> Result<EnvFilter, InfrastructureError> {
    let directives = if level.trim().is_empty() { "info" } else { level };
    EnvFilter::try_new(directives)
        .map_err(|e| InfrastructureError::Config(format!("Invalid log filter '{}': {}", directives, e)))
}
