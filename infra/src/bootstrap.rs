//! Settings loading and orchestrator wiring for host applications

use anyhow::{anyhow, Context, Result};
use std::sync::Arc;

use tc_core::domain::value_objects::Platform;
use tc_core::services::verification::{NativeBridge, VerificationOrchestrator};
use tc_shared::config::{AppConfig, Environment};

use crate::oauth::TruecallerApiClient;

/// Load `.env` files and read the application settings from the environment
///
/// The environment-specific file (e.g. `.env.development`) is read first so
/// its values win over the generic `.env`; variables already set in the
/// process are never overridden.
pub fn load_settings() -> AppConfig {
    let environment = Environment::from_env();
    if dotenvy::from_filename(environment.env_file()).is_ok() {
        tracing::debug!(file = environment.env_file(), "Loaded environment file");
    }
    dotenvy::dotenv().ok();

    let settings = AppConfig::from_env();
    tracing::debug!(environment = %settings.environment, "Settings loaded");
    settings
}

/// Build an orchestrator for `platform` from loaded settings
///
/// Android orchestrators get a [`TruecallerApiClient`] for the code exchange.
pub fn build_orchestrator<B: NativeBridge + 'static>(
    bridge: Arc<B>,
    platform: Platform,
    settings: &AppConfig,
) -> Result<VerificationOrchestrator<B>> {
    let config = settings.truecaller.clone();

    let orchestrator = match platform {
        Platform::Android => {
            let api = TruecallerApiClient::new(settings.api.clone())
                .context("Failed to create Truecaller API client")?;
            VerificationOrchestrator::android(bridge, Arc::new(api), config)
        }
        Platform::Ios => VerificationOrchestrator::ios(bridge, config),
    };

    tracing::info!(platform = %platform, "Verification orchestrator ready");
    Ok(orchestrator)
}

/// Build an orchestrator for the platform this binary was compiled for
pub fn build_orchestrator_for_target<B: NativeBridge + 'static>(
    bridge: Arc<B>,
    settings: &AppConfig,
) -> Result<VerificationOrchestrator<B>> {
    let platform = Platform::current()
        .ok_or_else(|| anyhow!("Truecaller verification requires an Android or iOS target"))?;
    build_orchestrator(bridge, platform, settings)
}
