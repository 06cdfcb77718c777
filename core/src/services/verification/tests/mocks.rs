//! Mock implementations for testing the verification workflow

use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::entities::{SdkOptions, TokenRequest, UserInfoResponse};
use crate::services::verification::{EventEmitter, EventHandler, EventHub, ListenerId, NativeBridge, OAuthApiClient};

// Mock native module backed by an in-process event hub
pub struct MockNativeBridge {
    pub hub: EventHub,
    pub usable: AtomicBool,
    pub init_error: Mutex<Option<String>>,
    pub request_error: Mutex<Option<String>>,
    pub init_calls: AtomicUsize,
    pub request_calls: AtomicUsize,
    pub added: AtomicUsize,
    pub removed: AtomicUsize,
    pub last_options: Mutex<Option<SdkOptions>>,
}

impl MockNativeBridge {
    pub fn new() -> Self {
        Self {
            hub: EventHub::new(),
            usable: AtomicBool::new(true),
            init_error: Mutex::new(None),
            request_error: Mutex::new(None),
            init_calls: AtomicUsize::new(0),
            request_calls: AtomicUsize::new(0),
            added: AtomicUsize::new(0),
            removed: AtomicUsize::new(0),
            last_options: Mutex::new(None),
        }
    }

    pub fn failing_init(message: &str) -> Self {
        let bridge = Self::new();
        *bridge.init_error.lock().unwrap() = Some(message.to_string());
        bridge
    }

    pub fn unusable() -> Self {
        let bridge = Self::new();
        bridge.usable.store(false, Ordering::SeqCst);
        bridge
    }

    pub fn set_init_error(&self, message: Option<&str>) {
        *self.init_error.lock().unwrap() = message.map(str::to_string);
    }

    pub fn set_request_error(&self, message: Option<&str>) {
        *self.request_error.lock().unwrap() = message.map(str::to_string);
    }

    pub fn emit(&self, event: &str, payload: Value) -> usize {
        self.hub.emit(event, payload)
    }

    pub fn init_calls(&self) -> usize {
        self.init_calls.load(Ordering::SeqCst)
    }

    pub fn request_calls(&self) -> usize {
        self.request_calls.load(Ordering::SeqCst)
    }

    pub fn total_listeners(&self) -> usize {
        self.hub.total_listeners()
    }

    pub fn listener_count_for(&self, event: &str) -> usize {
        self.hub.listener_count(event)
    }
}

impl EventEmitter for MockNativeBridge {
    fn add_listener(&self, event: &str, handler: EventHandler) -> ListenerId {
        self.added.fetch_add(1, Ordering::SeqCst);
        self.hub.add_listener(event, handler)
    }

    fn remove_listener(&self, id: ListenerId) {
        self.removed.fetch_add(1, Ordering::SeqCst);
        self.hub.remove_listener(id)
    }

    fn listener_count(&self, event: &str) -> usize {
        self.hub.listener_count(event)
    }
}

#[async_trait]
impl NativeBridge for MockNativeBridge {
    async fn initialize_sdk(&self, options: &SdkOptions) -> Result<(), String> {
        self.init_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_options.lock().unwrap() = Some(options.clone());
        match self.init_error.lock().unwrap().clone() {
            Some(message) => Err(message),
            None => Ok(()),
        }
    }

    async fn is_usable(&self) -> bool {
        self.usable.load(Ordering::SeqCst)
    }

    async fn request_profile(&self) -> Result<(), String> {
        self.request_calls.fetch_add(1, Ordering::SeqCst);
        match self.request_error.lock().unwrap().clone() {
            Some(message) => Err(message),
            None => Ok(()),
        }
    }
}

// Mock OAuth API recording every call in order
pub struct MockOAuthApiClient {
    pub token: Result<String, String>,
    pub user_info: Result<UserInfoResponse, String>,
    pub token_requests: Mutex<Vec<TokenRequest>>,
    pub bearer_tokens: Mutex<Vec<String>>,
    pub calls: Mutex<Vec<&'static str>>,
}

impl MockOAuthApiClient {
    pub fn new(token: &str, user_info: UserInfoResponse) -> Self {
        Self {
            token: Ok(token.to_string()),
            user_info: Ok(user_info),
            token_requests: Mutex::new(Vec::new()),
            bearer_tokens: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_token(message: &str) -> Self {
        let mut api = Self::new("unused", sample_user_info());
        api.token = Err(message.to_string());
        api
    }

    pub fn failing_user_info(message: &str) -> Self {
        let mut api = Self::new("T1", sample_user_info());
        api.user_info = Err(message.to_string());
        api
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl OAuthApiClient for MockOAuthApiClient {
    async fn exchange_authorization_code(&self, request: &TokenRequest) -> Result<String, String> {
        self.calls.lock().unwrap().push("token");
        self.token_requests.lock().unwrap().push(request.clone());
        self.token.clone()
    }

    async fn fetch_user_info(&self, access_token: &str) -> Result<UserInfoResponse, String> {
        self.calls.lock().unwrap().push("user_info");
        self.bearer_tokens.lock().unwrap().push(access_token.to_string());
        self.user_info.clone()
    }
}

pub fn sample_user_info() -> UserInfoResponse {
    UserInfoResponse {
        given_name: "Asha".to_string(),
        family_name: Some("Rao".to_string()),
        phone_number: "919876543210".to_string(),
        phone_number_country_code: "IN".to_string(),
        gender: Some("female".to_string()),
        email: None,
    }
}
