//! Shared configuration and common types for the Truecaller verification workspace
//!
//! This crate provides functionality used by both the core and infra crates:
//! - Configuration types (SDK configuration, API endpoints, environment, logging)
//! - Android presentation customizations and SDK languages
//! - Event names, API URLs and default values
//! - Utility functions (phone masking for logs)

pub mod config;
pub mod constants;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    ApiConfig, AppConfig, ButtonShape, ButtonText, ConsentHeading, Environment, FooterText, LogFormat,
    LoggingConfig, TruecallerConfig,
};
pub use types::Language;
pub use utils::phone;
