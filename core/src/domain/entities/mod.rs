//! Domain entities exchanged with the native SDK and the OAuth API.

pub mod oauth;
pub mod profile;
pub mod provider_response;
pub mod sdk_options;

// Re-export commonly used types
pub use oauth::{TokenRequest, TokenResponse};
pub use profile::{CanonicalProfile, DirectProfilePayload, UserInfoResponse};
pub use provider_response::{FailurePayload, RawProviderResponse, UNKNOWN_FAILURE_MESSAGE};
pub use sdk_options::{AndroidSdkOptions, Credentials, IosSdkOptions, SdkOptions};
