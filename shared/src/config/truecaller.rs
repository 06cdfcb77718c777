//! Truecaller SDK configuration supplied by the application

use serde::{Deserialize, Serialize};
use std::env;

use super::customization::{ButtonShape, ButtonText, ConsentHeading, FooterText};
use crate::types::Language;

/// Configuration for initializing the Truecaller SDK
///
/// Credentials are per-platform: Android needs a client id, iOS needs both an
/// app key and an app link. Presentation options only apply to Android and
/// fall back to documented defaults when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TruecallerConfig {
    /// Android client ID for Truecaller SDK
    ///
    /// Blank values count as missing; anything else is sent to the SDK and
    /// the token endpoint exactly as configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_client_id: Option<String>,

    /// iOS app key for Truecaller SDK
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios_app_key: Option<String>,

    /// iOS app link for Truecaller SDK
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios_app_link: Option<String>,

    /// Color of the Truecaller button on Android (`#RRGGBB`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_button_color: Option<String>,

    /// Text color of the Truecaller button on Android (`#RRGGBB`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_button_text_color: Option<String>,

    /// Shape of the Truecaller button on Android
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_button_shape: Option<ButtonShape>,

    /// Text displayed on the Truecaller button on Android
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_button_text: Option<ButtonText>,

    /// Text displayed on the footer button on Android
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_footer_button_text: Option<FooterText>,

    /// Heading text for the consent screen on Android
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_consent_heading: Option<ConsentHeading>,

    /// Locale of the consent screen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

impl TruecallerConfig {
    /// Configuration for the Android code-exchange flow
    pub fn android(client_id: impl Into<String>) -> Self {
        Self {
            android_client_id: Some(client_id.into()),
            ..Default::default()
        }
    }

    /// Configuration for the iOS direct-profile flow
    pub fn ios(app_key: impl Into<String>, app_link: impl Into<String>) -> Self {
        Self {
            ios_app_key: Some(app_key.into()),
            ios_app_link: Some(app_link.into()),
            ..Default::default()
        }
    }

    pub fn with_button_color(mut self, color: impl Into<String>) -> Self {
        self.android_button_color = Some(color.into());
        self
    }

    pub fn with_button_text_color(mut self, color: impl Into<String>) -> Self {
        self.android_button_text_color = Some(color.into());
        self
    }

    pub fn with_button_shape(mut self, shape: ButtonShape) -> Self {
        self.android_button_shape = Some(shape);
        self
    }

    pub fn with_button_text(mut self, text: ButtonText) -> Self {
        self.android_button_text = Some(text);
        self
    }

    pub fn with_footer_button_text(mut self, text: FooterText) -> Self {
        self.android_footer_button_text = Some(text);
        self
    }

    pub fn with_consent_heading(mut self, heading: ConsentHeading) -> Self {
        self.android_consent_heading = Some(heading);
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Load configuration from `TRUECALLER_*` environment variables
    ///
    /// Unparseable customization values are ignored so the defaults apply.
    pub fn from_env() -> Self {
        Self {
            android_client_id: non_empty_var("TRUECALLER_ANDROID_CLIENT_ID"),
            ios_app_key: non_empty_var("TRUECALLER_IOS_APP_KEY"),
            ios_app_link: non_empty_var("TRUECALLER_IOS_APP_LINK"),
            android_button_color: non_empty_var("TRUECALLER_ANDROID_BUTTON_COLOR"),
            android_button_text_color: non_empty_var("TRUECALLER_ANDROID_BUTTON_TEXT_COLOR"),
            android_button_shape: wire_var("TRUECALLER_ANDROID_BUTTON_SHAPE"),
            android_button_text: wire_var("TRUECALLER_ANDROID_BUTTON_TEXT"),
            android_footer_button_text: wire_var("TRUECALLER_ANDROID_FOOTER_BUTTON_TEXT"),
            android_consent_heading: wire_var("TRUECALLER_ANDROID_CONSENT_HEADING"),
            language: non_empty_var("TRUECALLER_LANGUAGE").and_then(|v| v.parse().ok()),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parse a `TRUECALLER_ANDROID_*` wire value through its serde representation
fn wire_var<T: serde::de::DeserializeOwned>(key: &str) -> Option<T> {
    non_empty_var(key).and_then(|v| serde_json::from_value(serde_json::Value::String(v)).ok())
}
