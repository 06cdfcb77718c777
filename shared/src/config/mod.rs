//! Configuration module
//!
//! - `truecaller` - SDK credentials and presentation options
//! - `customization` - Android consent screen options
//! - `api` - OAuth endpoints for the code-exchange flow
//! - `environment` - Environment detection and logging configuration

pub mod api;
pub mod customization;
pub mod environment;
pub mod truecaller;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use api::ApiConfig;
pub use customization::{ButtonShape, ButtonText, ConsentHeading, FooterText};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use truecaller::TruecallerConfig;

/// Complete application settings combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// SDK configuration
    #[serde(default)]
    pub truecaller: TruecallerConfig,

    /// OAuth endpoint configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let mut logging = LoggingConfig::for_environment(environment);
        if let Ok(level) = std::env::var("RUST_LOG") {
            logging.level = level;
        }

        Self {
            environment,
            truecaller: TruecallerConfig::from_env(),
            api: ApiConfig::from_env(),
            logging,
        }
    }
}
