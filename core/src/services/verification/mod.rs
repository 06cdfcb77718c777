//! Truecaller verification workflow
//!
//! This module provides:
//! - Configuration validation per platform
//! - Native SDK initialization with default customizations
//! - Scoped success/failure event subscriptions
//! - Direct-profile and code-exchange resolution of success events
//! - The orchestrator tying them together behind observable state

mod event_hub;
mod orchestrator;
mod provider;
mod subscription;
mod traits;
mod types;
mod validator;

#[cfg(test)]
mod tests;

pub use event_hub::EventHub;
pub use orchestrator::VerificationOrchestrator;
pub use provider::{CodeExchangeProvider, DirectProfileProvider, VerificationProvider};
pub use subscription::{Subscription, SubscriptionManager};
pub use traits::{EventEmitter, EventHandler, ListenerId, NativeBridge, OAuthApiClient};
pub use types::ProviderEvent;
pub use validator::validate_config;
