//! # Infrastructure Layer
//!
//! Concrete implementations behind the core verification traits:
//!
//! - **OAuth**: reqwest client for the Truecaller token and user-info endpoints
//! - **Telemetry**: tracing subscriber setup driven by `LoggingConfig`
//! - **Bootstrap**: `.env` loading and orchestrator construction

// Re-export core types for convenience
pub use tc_core::errors::*;

/// OAuth module - Truecaller code-exchange HTTP client
pub mod oauth;

/// Tracing subscriber initialization
pub mod telemetry;

/// Settings loading and orchestrator wiring
pub mod bootstrap;

pub use bootstrap::{build_orchestrator, load_settings};
pub use oauth::TruecallerApiClient;
pub use telemetry::init_tracing;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP transport or decoding error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Request failed with status code {status}: {message}")]
    Api { status: u16, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}
