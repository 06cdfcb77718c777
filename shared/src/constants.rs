//! Fixed names and defaults shared by the native bridge, the HTTP client and the orchestrator

/// Event names emitted by the Android native module
pub mod android_events {
    /// Authorization code delivered after the user consented
    pub const SUCCESS: &str = "TruecallerAndroidSuccess";
    /// User declined or the SDK reported a failure
    pub const FAILURE: &str = "TruecallerAndroidFailure";
    /// Native module failed outside the OAuth callback (init, activity lookup)
    pub const ERROR: &str = "TruecallerAndroidError";
    /// The number could not be verified through the one-tap flow
    pub const VERIFICATION_REQUIRED: &str = "TruecallerAndroidVerificationRequired";
}

/// Event names emitted by the iOS native module
pub mod ios_events {
    /// Profile delivered directly by the SDK
    pub const SUCCESS: &str = "TruecallerIOSSuccess";
    /// User declined or the SDK reported a failure
    pub const FAILURE: &str = "TruecallerIOSFailure";
}

/// Truecaller OAuth endpoints used by the code-exchange flow
pub mod api_urls {
    pub const TOKEN_URL: &str = "https://oauth-account-noneu.truecaller.com/v1/token";
    pub const USER_INFO_URL: &str = "https://oauth-account-noneu.truecaller.com/v1/userinfo";
}

/// OAuth grant type sent with the token request
pub const GRANT_TYPE_AUTHORIZATION_CODE: &str = "authorization_code";

/// Default Truecaller button color
pub const DEFAULT_BUTTON_COLOR: &str = "#212121";

/// Default Truecaller button text color
pub const DEFAULT_BUTTON_TEXT_COLOR: &str = "#FFFFFF";

/// Default HTTP request timeout for the token and profile endpoints
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
