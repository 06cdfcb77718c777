//! Traits for native bridge and OAuth API integration

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::entities::{SdkOptions, TokenRequest, UserInfoResponse};

/// Callback invoked with the payload of a native event
pub type EventHandler = Box<dyn Fn(Value) + Send + Sync>;

/// Handle identifying a registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Listener registry of a native module
pub trait EventEmitter: Send + Sync {
    /// Register a handler for a named event
    fn add_listener(&self, event: &str, handler: EventHandler) -> ListenerId;
    /// Remove a previously registered handler; unknown ids are ignored
    fn remove_listener(&self, id: ListenerId);
    /// Number of handlers currently registered for an event
    fn listener_count(&self, event: &str) -> usize;
}

/// Imperative call surface of the native Truecaller module
///
/// Results of `request_profile` arrive through the emitter, never as its
/// return value.
#[async_trait]
pub trait NativeBridge: EventEmitter {
    /// Initialize the native SDK (`initializeSdk`)
    async fn initialize_sdk(&self, options: &SdkOptions) -> Result<(), String>;
    /// Whether the SDK can run on this device (`isSdkUsable` / `isSupported`)
    async fn is_usable(&self) -> bool;
    /// Open the consent flow (`requestAuthorizationCode` / `requestTrueProfile`)
    async fn request_profile(&self) -> Result<(), String>;
}

/// Trait for the Truecaller OAuth API
#[async_trait]
pub trait OAuthApiClient: Send + Sync {
    /// Exchange an authorization code for an access token
    async fn exchange_authorization_code(&self, request: &TokenRequest) -> Result<String, String>;
    /// Fetch the user profile with a bearer access token
    async fn fetch_user_info(&self, access_token: &str) -> Result<UserInfoResponse, String>;
}
