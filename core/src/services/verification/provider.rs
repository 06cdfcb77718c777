//! Platform-specific resolution of native success events
//!
//! A provider is selected once when the orchestrator is built, so the
//! platform decision is made in exactly one place.

use async_trait::async_trait;
use std::sync::Arc;
use tc_shared::config::TruecallerConfig;
use tc_shared::utils::mask_phone_number;

use crate::domain::entities::{CanonicalProfile, Credentials, RawProviderResponse, SdkOptions, TokenRequest};
use crate::domain::value_objects::Platform;
use crate::errors::{VerificationError, VerificationResult};

use super::traits::OAuthApiClient;
use super::validator::validate_config;

/// Strategy turning a native success payload into a [`CanonicalProfile`]
#[async_trait]
pub trait VerificationProvider: Send + Sync {
    fn platform(&self) -> Platform;

    /// Validate the platform-required configuration fields
    fn validate(&self, config: &TruecallerConfig) -> VerificationResult<Credentials> {
        validate_config(self.platform(), config)
    }

    /// Options for the native `initializeSdk` call, defaults merged in
    fn sdk_options(&self, config: &TruecallerConfig) -> VerificationResult<SdkOptions> {
        let credentials = self.validate(config)?;
        Ok(SdkOptions::resolve(credentials, config))
    }

    /// Resolve a decoded success payload into the canonical profile
    async fn resolve_profile(
        &self,
        config: &TruecallerConfig,
        response: RawProviderResponse,
    ) -> VerificationResult<CanonicalProfile>;
}

/// iOS provider: the success event already carries the profile
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectProfileProvider;

impl DirectProfileProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl VerificationProvider for DirectProfileProvider {
    fn platform(&self) -> Platform {
        Platform::Ios
    }

    async fn resolve_profile(
        &self,
        _config: &TruecallerConfig,
        response: RawProviderResponse,
    ) -> VerificationResult<CanonicalProfile> {
        match response {
            RawProviderResponse::Profile(payload) => Ok(payload.into()),
            other => Err(VerificationError::invalid_payload(format!(
                "expected a profile, received {}",
                other.kind()
            ))),
        }
    }
}

/// Android provider: exchanges the authorization code, then fetches the profile
pub struct CodeExchangeProvider<C: OAuthApiClient> {
    api: Arc<C>,
}

impl<C: OAuthApiClient> CodeExchangeProvider<C> {
    pub fn new(api: Arc<C>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<C: OAuthApiClient> VerificationProvider for CodeExchangeProvider<C> {
    fn platform(&self) -> Platform {
        Platform::Android
    }

    async fn resolve_profile(
        &self,
        config: &TruecallerConfig,
        response: RawProviderResponse,
    ) -> VerificationResult<CanonicalProfile> {
        let (authorization_code, code_verifier) = match response {
            RawProviderResponse::AuthorizationCode {
                authorization_code,
                code_verifier,
            } => (authorization_code, code_verifier),
            other => {
                return Err(VerificationError::invalid_payload(format!(
                    "expected an authorization code, received {}",
                    other.kind()
                )))
            }
        };

        let client_id = match self.validate(config)? {
            Credentials::Android { client_id } => client_id,
            Credentials::Ios { .. } => {
                return Err(VerificationError::configuration(
                    Platform::Android.missing_credentials_message(),
                ))
            }
        };

        let request = TokenRequest::authorization_code(client_id, authorization_code, code_verifier);

        let access_token = self
            .api
            .exchange_authorization_code(&request)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    event = "token_exchange_failed",
                    "Failed to exchange authorization code for access token"
                );
                VerificationError::exchange(e)
            })?;

        tracing::debug!(event = "token_exchanged", "Authorization code exchanged for access token");

        let user_info = self
            .api
            .fetch_user_info(&access_token)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    event = "user_info_failed",
                    "Failed to fetch user profile"
                );
                VerificationError::exchange(e)
            })?;

        tracing::info!(
            phone = %mask_phone_number(&user_info.phone_number),
            country = %user_info.phone_number_country_code,
            event = "profile_fetched",
            "Fetched verified Truecaller profile"
        );

        Ok(user_info.into())
    }
}
