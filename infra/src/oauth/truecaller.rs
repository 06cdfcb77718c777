//! Truecaller OAuth API client
//!
//! Performs the two HTTP calls of the Android code-exchange flow:
//!
//! - `POST <token-url>` with a form-encoded `authorization_code` grant
//! - `GET <user-info-url>` with the resulting bearer token
//!
//! Requests are not retried; the configured timeout applies to each call.

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, error, info};

use tc_core::domain::entities::{TokenRequest, TokenResponse, UserInfoResponse};
use tc_core::services::verification::OAuthApiClient;
use tc_shared::config::ApiConfig;
use tc_shared::utils::mask_phone_number;

use crate::InfrastructureError;

/// reqwest-backed implementation of [`OAuthApiClient`]
#[derive(Debug, Clone)]
pub struct TruecallerApiClient {
    client: Client,
    config: ApiConfig,
}

impl TruecallerApiClient {
    /// Create a client for the given endpoints
    pub fn new(config: ApiConfig) -> Result<Self, InfrastructureError> {
        if config.token_url.trim().is_empty() || config.user_info_url.trim().is_empty() {
            return Err(InfrastructureError::Config(
                "Truecaller token and user info URLs must be set".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            token_url = %config.token_url,
            user_info_url = %config.user_info_url,
            "Truecaller API client initialized"
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(ApiConfig::from_env())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Exchange an authorization code for a token response
    pub async fn request_access_token(
        &self,
        request: &TokenRequest,
    ) -> Result<TokenResponse, InfrastructureError> {
        debug!(client_id = %request.client_id, "Requesting Truecaller access token");

        let response = self
            .client
            .post(&self.config.token_url)
            .form(request)
            .send()
            .await?;

        let token = ensure_success(response, "token").await?.json::<TokenResponse>().await?;

        debug!(
            token_type = token.token_type.as_deref().unwrap_or("unknown"),
            expires_in = token.expires_in,
            "Received Truecaller access token"
        );
        Ok(token)
    }

    /// Fetch the verified profile with a bearer token
    pub async fn request_user_info(
        &self,
        access_token: &str,
    ) -> Result<UserInfoResponse, InfrastructureError> {
        let response = self
            .client
            .get(&self.config.user_info_url)
            .bearer_auth(access_token)
            .send()
            .await?;

        let user_info = ensure_success(response, "user info")
            .await?
            .json::<UserInfoResponse>()
            .await?;

        info!(
            phone = %mask_phone_number(&user_info.phone_number),
            "Fetched Truecaller user info"
        );
        Ok(user_info)
    }
}

/// Turn a non-2xx response into [`InfrastructureError::Api`] carrying the body text
async fn ensure_success(response: Response, call: &str) -> Result<Response, InfrastructureError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    error!(status = status.as_u16(), call = call, "Truecaller API returned an error");

    Err(InfrastructureError::Api {
        status: status.as_u16(),
        message: if body.trim().is_empty() {
            status.canonical_reason().unwrap_or("Unknown error").to_string()
        } else {
            body
        },
    })
}

#[async_trait]
impl OAuthApiClient for TruecallerApiClient {
    async fn exchange_authorization_code(&self, request: &TokenRequest) -> Result<String, String> {
        self.request_access_token(request)
            .await
            .map(|token| token.access_token)
            .map_err(|e| e.to_string())
    }

    async fn fetch_user_info(&self, access_token: &str) -> Result<UserInfoResponse, String> {
        self.request_user_info(access_token)
            .await
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_default_endpoints() {
        let client = TruecallerApiClient::new(ApiConfig::default()).unwrap();
        assert_eq!(
            client.config().token_url,
            "https://oauth-account-noneu.truecaller.com/v1/token"
        );
    }

    #[test]
    fn test_new_rejects_blank_urls() {
        let config = ApiConfig {
            token_url: " ".to_string(),
            ..ApiConfig::default()
        };

        let result = TruecallerApiClient::new(config);
        match result.unwrap_err() {
            InfrastructureError::Config(message) => assert!(message.contains("URLs")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_api_error_message() {
        let error = InfrastructureError::Api {
            status: 401,
            message: "invalid_grant".to_string(),
        };
        assert_eq!(error.to_string(), "Request failed with status code 401: invalid_grant");
    }
}
