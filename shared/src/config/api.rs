//! Truecaller OAuth API endpoint configuration

use serde::{Deserialize, Serialize};
use std::env;

use crate::constants::{api_urls, DEFAULT_REQUEST_TIMEOUT_SECS};

/// Endpoints and transport settings for the code-exchange flow
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Authorization code to access token exchange endpoint
    pub token_url: String,

    /// Profile endpoint queried with the access token
    pub user_info_url: String,

    /// Timeout applied to each HTTP request in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            token_url: api_urls::TOKEN_URL.to_string(),
            user_info_url: api_urls::USER_INFO_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Point both endpoints at a different host, keeping the Truecaller paths
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            token_url: format!("{}/v1/token", base),
            user_info_url: format!("{}/v1/userinfo", base),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables, falling back to the public endpoints
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            token_url: env::var("TRUECALLER_TOKEN_URL").unwrap_or(defaults.token_url),
            user_info_url: env::var("TRUECALLER_USER_INFO_URL").unwrap_or(defaults.user_info_url),
            request_timeout_secs: env::var("TRUECALLER_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        }
    }
}

fn default_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}
