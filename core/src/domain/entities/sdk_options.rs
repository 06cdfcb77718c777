//! Options handed to the native `initializeSdk` call

use serde::{Deserialize, Serialize};
use tc_shared::config::{ButtonShape, ButtonText, ConsentHeading, FooterText, TruecallerConfig};
use tc_shared::constants::{DEFAULT_BUTTON_COLOR, DEFAULT_BUTTON_TEXT_COLOR};
use tc_shared::Language;

/// Platform credentials extracted from a validated configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    Android { client_id: String },
    Ios { app_key: String, app_link: String },
}

/// Android options with every customization resolved to a value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidSdkOptions {
    pub client_id: String,
    pub button_color: String,
    pub button_text_color: String,
    pub button_text: ButtonText,
    pub button_shape: ButtonShape,
    #[serde(rename = "footerText")]
    pub footer_button_text: FooterText,
    pub consent_heading: ConsentHeading,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<Language>,
}

/// iOS options; the iOS SDK takes no presentation customizations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IosSdkOptions {
    pub app_key: String,
    pub app_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<Language>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SdkOptions {
    Android(AndroidSdkOptions),
    Ios(IosSdkOptions),
}

impl SdkOptions {
    /// Merge validated credentials with the configuration's customizations
    pub fn resolve(credentials: Credentials, config: &TruecallerConfig) -> Self {
        match credentials {
            Credentials::Android { client_id } => SdkOptions::Android(AndroidSdkOptions {
                client_id,
                button_color: non_blank_or(&config.android_button_color, DEFAULT_BUTTON_COLOR),
                button_text_color: non_blank_or(
                    &config.android_button_text_color,
                    DEFAULT_BUTTON_TEXT_COLOR,
                ),
                button_text: config.android_button_text.unwrap_or_default(),
                button_shape: config.android_button_shape.unwrap_or_default(),
                footer_button_text: config.android_footer_button_text.unwrap_or_default(),
                consent_heading: config.android_consent_heading.unwrap_or_default(),
                language_code: config.language,
            }),
            Credentials::Ios { app_key, app_link } => SdkOptions::Ios(IosSdkOptions {
                app_key,
                app_link,
                language_code: config.language,
            }),
        }
    }
}

fn non_blank_or(value: &Option<String>, default: &str) -> String {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(default)
        .to_string()
}
