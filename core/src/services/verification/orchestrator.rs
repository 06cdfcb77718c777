//! Verification orchestrator driving the native SDK

use std::sync::Arc;
use tc_shared::config::TruecallerConfig;
use tc_shared::utils::{is_valid_international_phone, mask_phone_number};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::domain::entities::{CanonicalProfile, FailurePayload, RawProviderResponse};
use crate::domain::value_objects::{OrchestratorState, Platform, VerificationPhase};
use crate::errors::{VerificationError, VerificationResult};

use super::provider::{CodeExchangeProvider, DirectProfileProvider, VerificationProvider};
use super::subscription::SubscriptionManager;
use super::traits::{EventEmitter, NativeBridge, OAuthApiClient};
use super::types::ProviderEvent;

/// Orchestrates initialization, verification requests and event resolution
///
/// All operations take `&mut self`: there is a single logical caller and state
/// is never mutated concurrently. Every failure is recorded in
/// [`OrchestratorState::error`] and also returned so callers can branch on
/// the kind.
pub struct VerificationOrchestrator<B: NativeBridge + 'static> {
    /// Native module
    bridge: Arc<B>,
    /// Platform strategy, fixed at construction
    provider: Arc<dyn VerificationProvider>,
    /// Current configuration; its identity drives re-subscription
    config: Arc<TruecallerConfig>,
    /// Observable state
    state: OrchestratorState,
    /// Native listeners for the current configuration
    subscriptions: SubscriptionManager,
    events_tx: UnboundedSender<ProviderEvent>,
    events_rx: UnboundedReceiver<ProviderEvent>,
}

impl<B: NativeBridge + 'static> VerificationOrchestrator<B> {
    /// Create an orchestrator for an explicit provider
    ///
    /// # Arguments
    ///
    /// * `bridge` - Native module implementation
    /// * `provider` - Platform strategy resolving success events
    /// * `config` - SDK configuration
    pub fn new(
        bridge: Arc<B>,
        provider: Arc<dyn VerificationProvider>,
        config: impl Into<Arc<TruecallerConfig>>,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            bridge,
            provider,
            config: config.into(),
            state: OrchestratorState::default(),
            subscriptions: SubscriptionManager::new(),
            events_tx,
            events_rx,
        }
    }

    /// Android orchestrator exchanging authorization codes through `api`
    pub fn android<C: OAuthApiClient + 'static>(
        bridge: Arc<B>,
        api: Arc<C>,
        config: impl Into<Arc<TruecallerConfig>>,
    ) -> Self {
        Self::new(bridge, Arc::new(CodeExchangeProvider::new(api)), config)
    }

    /// iOS orchestrator reading the profile from the success event
    pub fn ios(bridge: Arc<B>, config: impl Into<Arc<TruecallerConfig>>) -> Self {
        Self::new(bridge, Arc::new(DirectProfileProvider::new()), config)
    }

    pub fn state(&self) -> &OrchestratorState {
        &self.state
    }

    pub fn profile(&self) -> Option<&CanonicalProfile> {
        self.state.profile.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn is_initialized(&self) -> bool {
        self.state.initialized
    }

    pub fn phase(&self) -> VerificationPhase {
        self.state.phase
    }

    pub fn platform(&self) -> Platform {
        self.provider.platform()
    }

    pub fn config(&self) -> &Arc<TruecallerConfig> {
        &self.config
    }

    /// Validate the configuration and initialize the native SDK
    ///
    /// Safe to call again after a failure. On success the event listeners
    /// are (re)established for the current configuration.
    pub async fn initialize(&mut self) -> VerificationResult<()> {
        self.state.phase = VerificationPhase::Initializing;
        let platform = self.platform();

        let result = match self.provider.sdk_options(&self.config) {
            Ok(options) => self
                .bridge
                .initialize_sdk(&options)
                .await
                .map_err(VerificationError::initialization),
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => {
                self.state.initialized = true;
                self.state.error = None;
                self.state.phase = VerificationPhase::Initialized;
                tracing::info!(platform = %platform, event = "sdk_initialized", "Truecaller SDK initialized");
                self.sync_subscriptions()
            }
            Err(e) => {
                self.state.initialized = false;
                self.state.phase = VerificationPhase::Uninitialized;
                self.record_error(&e);
                // Listeners are released whenever initialization is lost
                let _ = self.sync_subscriptions();
                Err(e)
            }
        }
    }

    /// Replace the configuration, re-subscribing listeners for the new one
    ///
    /// The SDK is not re-initialized; call [`initialize`](Self::initialize)
    /// to apply new presentation options.
    pub fn set_config(&mut self, config: impl Into<Arc<TruecallerConfig>>) -> VerificationResult<()> {
        self.config = config.into();
        self.sync_subscriptions()
    }

    /// Ask the native SDK to start a verification
    ///
    /// The outcome arrives later as a native event; drive it with
    /// [`process_next_event`](Self::process_next_event).
    pub async fn trigger_verification(&mut self) -> VerificationResult<()> {
        if !self.state.initialized {
            let e = VerificationError::NotInitialized;
            self.record_error(&e);
            return Err(e);
        }

        if let Err(e) = self.request_profile().await {
            self.state.phase = VerificationPhase::Failed;
            self.record_error(&e);
            return Err(e);
        }
        Ok(())
    }

    async fn request_profile(&mut self) -> VerificationResult<()> {
        if !self.bridge.is_usable().await {
            return Err(VerificationError::UnsupportedDevice);
        }
        self.provider.validate(&self.config)?;

        self.state.phase = VerificationPhase::Requesting;
        tracing::info!(platform = %self.platform(), event = "verification_requested", "Requesting Truecaller profile");

        self.bridge
            .request_profile()
            .await
            .map_err(VerificationError::native_call)
    }

    /// Wait for the next native event and apply it to the state
    pub async fn process_next_event(&mut self) -> &OrchestratorState {
        if let Some(event) = self.events_rx.recv().await {
            self.handle_event(event).await;
        }
        &self.state
    }

    /// Apply every event already delivered, without waiting; returns how many were handled
    pub async fn process_pending_events(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event).await;
            handled += 1;
        }
        handled
    }

    /// Remove native listeners; a later successful `initialize` subscribes again
    pub fn teardown(&mut self) {
        self.subscriptions.teardown();
    }

    /// Whether native listeners are currently registered
    pub fn is_subscribed(&self) -> bool {
        self.subscriptions.is_subscribed()
    }

    async fn handle_event(&mut self, event: ProviderEvent) {
        match event {
            ProviderEvent::Failure(payload) => {
                let failure = FailurePayload::from_payload(payload);
                let message = failure.message();
                tracing::warn!(
                    error_code = ?failure.error_code,
                    error = %message,
                    event = "verification_failed",
                    "Truecaller reported a verification failure"
                );
                self.state.profile = None;
                self.state.error = Some(message);
                self.state.phase = VerificationPhase::Failed;
            }
            ProviderEvent::Success(payload) => match self.resolve_success(payload).await {
                Ok(profile) => {
                    tracing::info!(
                        phone = %mask_phone_number(&profile.phone_number),
                        international = is_valid_international_phone(&profile.phone_number),
                        event = "verification_resolved",
                        "Truecaller verification succeeded"
                    );
                    self.state.profile = Some(profile);
                    self.state.error = None;
                    self.state.phase = VerificationPhase::Resolved;
                }
                Err(e) => {
                    self.state.profile = None;
                    self.state.phase = VerificationPhase::Failed;
                    self.record_error(&e);
                }
            },
        }
    }

    async fn resolve_success(&self, payload: serde_json::Value) -> VerificationResult<CanonicalProfile> {
        let response = RawProviderResponse::from_payload(payload)
            .map_err(|e| VerificationError::invalid_payload(e.to_string()))?;
        self.provider.resolve_profile(&self.config, response).await
    }

    fn sync_subscriptions(&mut self) -> VerificationResult<()> {
        let emitter: Arc<dyn EventEmitter> = self.bridge.clone();
        let result = self.subscriptions.sync(
            emitter,
            self.provider.platform(),
            self.state.initialized,
            &self.config,
            &self.events_tx,
        );
        if let Err(e) = &result {
            self.record_error(e);
        }
        result
    }

    fn record_error(&mut self, error: &VerificationError) {
        tracing::warn!(
            kind = error.kind(),
            error = %error,
            event = "verification_error",
            "Verification error recorded"
        );
        self.state.error = Some(error.to_string());
    }
}
