//! Business services containing the verification workflow.

pub mod verification;

// Re-export commonly used types
pub use verification::{
    CodeExchangeProvider, DirectProfileProvider, EventEmitter, EventHandler, EventHub,
    ListenerId, NativeBridge, OAuthApiClient, ProviderEvent, Subscription, SubscriptionManager,
    VerificationOrchestrator, VerificationProvider,
};
