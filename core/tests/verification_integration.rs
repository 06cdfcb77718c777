//! Integration tests for the verification orchestrator through the public API

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use tc_core::domain::entities::{SdkOptions, TokenRequest, UserInfoResponse};
    use tc_core::domain::value_objects::VerificationPhase;
    use tc_core::services::verification::{
        EventEmitter, EventHandler, EventHub, ListenerId, NativeBridge, OAuthApiClient,
        VerificationOrchestrator,
    };
    use tc_shared::config::TruecallerConfig;
    use tc_shared::constants::{android_events, ios_events};

    // Native module that answers each request later from a background task
    struct ScriptedBridge {
        hub: Arc<EventHub>,
        outcome: (&'static str, Value),
        requests: AtomicUsize,
    }

    impl ScriptedBridge {
        fn new(event: &'static str, payload: Value) -> Self {
            Self {
                hub: Arc::new(EventHub::new()),
                outcome: (event, payload),
                requests: AtomicUsize::new(0),
            }
        }
    }

    impl EventEmitter for ScriptedBridge {
        fn add_listener(&self, event: &str, handler: EventHandler) -> ListenerId {
            self.hub.add_listener(event, handler)
        }

        fn remove_listener(&self, id: ListenerId) {
            self.hub.remove_listener(id)
        }

        fn listener_count(&self, event: &str) -> usize {
            self.hub.listener_count(event)
        }
    }

    #[async_trait]
    impl NativeBridge for ScriptedBridge {
        async fn initialize_sdk(&self, _options: &SdkOptions) -> Result<(), String> {
            Ok(())
        }

        async fn is_usable(&self) -> bool {
            true
        }

        async fn request_profile(&self) -> Result<(), String> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            let hub = Arc::clone(&self.hub);
            let (event, payload) = self.outcome.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(10)).await;
                hub.emit(event, payload);
            });
            Ok(())
        }
    }

    // OAuth API returning a fixed token and profile
    struct StaticApi {
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl OAuthApiClient for StaticApi {
        async fn exchange_authorization_code(&self, request: &TokenRequest) -> Result<String, String> {
            self.seen.lock().unwrap().push(format!("code={}", request.code));
            Ok("T1".to_string())
        }

        async fn fetch_user_info(&self, access_token: &str) -> Result<UserInfoResponse, String> {
            self.seen.lock().unwrap().push(format!("bearer={}", access_token));
            Ok(UserInfoResponse {
                given_name: "Asha".to_string(),
                family_name: None,
                phone_number: "919876543210".to_string(),
                phone_number_country_code: "IN".to_string(),
                gender: None,
                email: None,
            })
        }
    }

    #[tokio::test]
    async fn test_ios_verification_round_trip() {
        let bridge = Arc::new(ScriptedBridge::new(
            ios_events::SUCCESS,
            json!({
                "firstName": "Sam",
                "lastName": "Lee",
                "phoneNumber": "+15550100",
                "countryCode": "US",
                "gender": null,
                "email": "sam@example.com"
            }),
        ));
        let mut orchestrator = VerificationOrchestrator::ios(
            bridge.clone(),
            TruecallerConfig::ios("app-key", "https://app.link"),
        );

        orchestrator.initialize().await.unwrap();
        orchestrator.trigger_verification().await.unwrap();
        let state = orchestrator.process_next_event().await.clone();

        assert_eq!(state.phase, VerificationPhase::Resolved);
        let profile = state.profile.unwrap();
        assert_eq!(profile.first_name, "Sam");
        assert_eq!(profile.email.as_deref(), Some("sam@example.com"));
        assert_eq!(bridge.requests.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_android_verification_round_trip() {
        let bridge = Arc::new(ScriptedBridge::new(
            android_events::SUCCESS,
            json!({"authorizationCode": "AC1", "codeVerifier": "V1"}),
        ));
        let api = Arc::new(StaticApi { seen: Mutex::new(Vec::new()) });
        let mut orchestrator = VerificationOrchestrator::android(
            bridge,
            api.clone(),
            TruecallerConfig::android("client-1"),
        );

        orchestrator.initialize().await.unwrap();
        orchestrator.trigger_verification().await.unwrap();
        orchestrator.process_next_event().await;

        assert_eq!(orchestrator.profile().unwrap().first_name, "Asha");
        assert_eq!(
            *api.seen.lock().unwrap(),
            vec!["code=AC1".to_string(), "bearer=T1".to_string()]
        );
    }

    #[tokio::test]
    async fn test_android_failure_event() {
        let bridge = Arc::new(ScriptedBridge::new(
            android_events::FAILURE,
            json!({"errorCode": 2, "errorMessage": "User denied"}),
        ));
        let api = Arc::new(StaticApi { seen: Mutex::new(Vec::new()) });
        let mut orchestrator = VerificationOrchestrator::android(
            bridge,
            api.clone(),
            TruecallerConfig::android("client-1"),
        );

        orchestrator.initialize().await.unwrap();
        orchestrator.trigger_verification().await.unwrap();
        orchestrator.process_next_event().await;

        assert!(orchestrator.profile().is_none());
        assert_eq!(orchestrator.error(), Some("User denied"));
        assert!(api.seen.lock().unwrap().is_empty());
    }
}
