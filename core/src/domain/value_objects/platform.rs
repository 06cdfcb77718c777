//! Target platform of the native SDK

use serde::{Deserialize, Serialize};
use tc_shared::constants::{android_events, ios_events};

/// Native platform, which also decides how a success event is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Authorization code delivered, profile fetched over HTTP
    Android,
    /// Profile delivered directly by the SDK
    Ios,
}

impl Platform {
    /// Platform of the compilation target, if it is a mobile one
    pub fn current() -> Option<Platform> {
        if cfg!(target_os = "android") {
            Some(Platform::Android)
        } else if cfg!(target_os = "ios") {
            Some(Platform::Ios)
        } else {
            None
        }
    }

    pub fn success_event(&self) -> &'static str {
        match self {
            Platform::Android => android_events::SUCCESS,
            Platform::Ios => ios_events::SUCCESS,
        }
    }

    pub fn failure_event(&self) -> &'static str {
        match self {
            Platform::Android => android_events::FAILURE,
            Platform::Ios => ios_events::FAILURE,
        }
    }

    /// Message recorded when the platform's credentials are missing
    pub fn missing_credentials_message(&self) -> &'static str {
        match self {
            Platform::Android => "Android client ID is required for Android platform",
            Platform::Ios => "iOS app key and app link are required for iOS platform",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Android => write!(f, "android"),
            Platform::Ios => write!(f, "ios"),
        }
    }
}
