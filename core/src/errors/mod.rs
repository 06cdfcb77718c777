//! Verification error types
//!
//! Every variant renders to the message stored in the orchestrator's error
//! state, so `Display` carries the user-facing text and nothing else.

use thiserror::Error;

/// Errors produced while initializing the SDK or running a verification
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    /// A platform-required configuration field is missing
    #[error("{message}")]
    Configuration { message: String },

    /// The native module rejected initialization
    #[error("{message}")]
    Initialization { message: String },

    /// A verification was triggered before successful initialization
    #[error("SDK is not initialized. Call initialize first.")]
    NotInitialized,

    /// The native module reports the SDK cannot run on this device
    #[error("Truecaller SDK is not usable on this device")]
    UnsupportedDevice,

    /// A native call other than initialization was rejected
    #[error("{message}")]
    NativeCall { message: String },

    /// Token exchange or profile fetch failed
    #[error("{message}")]
    Exchange { message: String },

    /// A success event carried a payload of the wrong shape
    #[error("Invalid provider payload: {message}")]
    InvalidPayload { message: String },
}

impl VerificationError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    pub fn initialization(message: impl Into<String>) -> Self {
        Self::Initialization { message: message.into() }
    }

    pub fn native_call(message: impl Into<String>) -> Self {
        Self::NativeCall { message: message.into() }
    }

    pub fn exchange(message: impl Into<String>) -> Self {
        Self::Exchange { message: message.into() }
    }

    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self::InvalidPayload { message: message.into() }
    }

    /// Stable identifier used in structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Configuration { .. } => "configuration_error",
            Self::Initialization { .. } => "initialization_error",
            Self::NotInitialized => "not_initialized_error",
            Self::UnsupportedDevice => "unsupported_device_error",
            Self::NativeCall { .. } => "native_call_error",
            Self::Exchange { .. } => "exchange_error",
            Self::InvalidPayload { .. } => "invalid_payload_error",
        }
    }
}

pub type VerificationResult<T> = Result<T, VerificationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_state_message() {
        assert_eq!(
            VerificationError::initialization("init rejected").to_string(),
            "init rejected"
        );
        assert_eq!(
            VerificationError::NotInitialized.to_string(),
            "SDK is not initialized. Call initialize first."
        );
        assert_eq!(
            VerificationError::invalid_payload("missing field `authorizationCode`").to_string(),
            "Invalid provider payload: missing field `authorizationCode`"
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(VerificationError::UnsupportedDevice.kind(), "unsupported_device_error");
        assert_eq!(VerificationError::exchange("boom").kind(), "exchange_error");
    }
}
