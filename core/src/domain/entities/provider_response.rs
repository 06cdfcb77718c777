//! Payloads carried by native success and failure events

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::profile::DirectProfilePayload;

/// Message recorded when a failure event carries no `errorMessage`
pub const UNKNOWN_FAILURE_MESSAGE: &str = "Truecaller verification failed";

/// Success payload emitted by the native module
///
/// The Android module delivers an authorization code that still has to be
/// exchanged; the iOS module delivers the profile itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawProviderResponse {
    AuthorizationCode {
        #[serde(rename = "authorizationCode")]
        authorization_code: String,
        #[serde(rename = "codeVerifier")]
        code_verifier: String,
    },
    Profile(DirectProfilePayload),
}

impl RawProviderResponse {
    pub fn from_payload(payload: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(payload)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RawProviderResponse::AuthorizationCode { .. } => "authorization_code",
            RawProviderResponse::Profile(_) => "profile",
        }
    }
}

/// Failure payload emitted by the native module
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailurePayload {
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl FailurePayload {
    /// Decode leniently: a malformed failure payload is still a failure
    pub fn from_payload(payload: Value) -> Self {
        serde_json::from_value(payload).unwrap_or_default()
    }

    pub fn message(&self) -> String {
        self.error_message
            .clone()
            .unwrap_or_else(|| UNKNOWN_FAILURE_MESSAGE.to_string())
    }
}
