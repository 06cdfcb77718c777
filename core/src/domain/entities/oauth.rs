//! OAuth token exchange entities for the code-exchange flow

use serde::{Deserialize, Serialize};
use tc_shared::constants::GRANT_TYPE_AUTHORIZATION_CODE;

/// Form body posted to the token endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRequest {
    pub grant_type: String,
    pub client_id: String,
    pub code: String,
    pub code_verifier: String,
}

impl TokenRequest {
    /// Build an `authorization_code` grant request
    pub fn authorization_code(
        client_id: impl Into<String>,
        code: impl Into<String>,
        code_verifier: impl Into<String>,
    ) -> Self {
        Self {
            grant_type: GRANT_TYPE_AUTHORIZATION_CODE.to_string(),
            client_id: client_id.into(),
            code: code.into(),
            code_verifier: code_verifier.into(),
        }
    }
}

/// Body returned by the token endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub scope: Option<String>,
}
