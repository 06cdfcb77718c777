//! Scoped native event subscriptions

use std::sync::Arc;
use tc_shared::config::TruecallerConfig;
use tokio::sync::mpsc::UnboundedSender;

use crate::domain::value_objects::Platform;
use crate::errors::VerificationResult;

use super::traits::{EventEmitter, EventHandler, ListenerId};
use super::types::ProviderEvent;
use super::validator::validate_config;

/// A registered native listener, removed when the value is dropped
pub struct Subscription {
    emitter: Arc<dyn EventEmitter>,
    event: &'static str,
    id: ListenerId,
}

impl Subscription {
    pub fn new(emitter: Arc<dyn EventEmitter>, event: &'static str, handler: EventHandler) -> Self {
        let id = emitter.add_listener(event, handler);
        tracing::debug!(event = event, listener = id.0, "Subscribed to native event");
        Self { emitter, event, id }
    }

    pub fn event(&self) -> &'static str {
        self.event
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.emitter.remove_listener(self.id);
        tracing::debug!(event = self.event, listener = self.id.0, "Removed native listener");
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("event", &self.event)
            .field("id", &self.id)
            .finish()
    }
}

/// The success/failure listener pair for one configuration
#[derive(Debug)]
struct ListenerPair {
    _success: Subscription,
    _failure: Subscription,
}

/// Keeps at most one success and one failure listener registered
///
/// Listeners are rebuilt whenever the initialization flag or the identity of
/// the configuration changes. The previous pair is always released before a
/// new one is registered.
#[derive(Debug, Default)]
pub struct SubscriptionManager {
    active: Option<ListenerPair>,
    synced: Option<(bool, Arc<TruecallerConfig>)>,
}

impl SubscriptionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring listeners in line with the current initialization state and configuration
    ///
    /// A no-op when neither changed since the last call. When initialized but
    /// the configuration lacks the platform's credentials, nothing is
    /// registered and the configuration error is returned.
    pub fn sync(
        &mut self,
        emitter: Arc<dyn EventEmitter>,
        platform: Platform,
        initialized: bool,
        config: &Arc<TruecallerConfig>,
        sink: &UnboundedSender<ProviderEvent>,
    ) -> VerificationResult<()> {
        let unchanged = matches!(
            &self.synced,
            Some((was_initialized, synced_config))
                if *was_initialized == initialized && Arc::ptr_eq(synced_config, config)
        );
        if unchanged {
            return Ok(());
        }

        self.release();
        self.synced = Some((initialized, Arc::clone(config)));

        if !initialized {
            return Ok(());
        }

        validate_config(platform, config)?;

        let success_sink = sink.clone();
        let failure_sink = sink.clone();
        self.active = Some(ListenerPair {
            _success: Subscription::new(
                Arc::clone(&emitter),
                platform.success_event(),
                Box::new(move |payload| {
                    // The receiver lives as long as the orchestrator
                    let _ = success_sink.send(ProviderEvent::Success(payload));
                }),
            ),
            _failure: Subscription::new(
                emitter,
                platform.failure_event(),
                Box::new(move |payload| {
                    let _ = failure_sink.send(ProviderEvent::Failure(payload));
                }),
            ),
        });

        Ok(())
    }

    /// Remove the active listeners, if any
    pub fn release(&mut self) {
        self.active = None;
    }

    /// Release listeners and forget the synced state so the next sync subscribes again
    pub fn teardown(&mut self) {
        self.release();
        self.synced = None;
    }

    pub fn is_subscribed(&self) -> bool {
        self.active.is_some()
    }
}
