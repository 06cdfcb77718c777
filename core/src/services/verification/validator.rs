//! Platform-specific configuration validation

use tc_shared::config::TruecallerConfig;

use crate::domain::entities::Credentials;
use crate::domain::value_objects::Platform;
use crate::errors::{VerificationError, VerificationResult};

/// Check that the platform's required credentials are present
///
/// Android needs a client id; iOS needs both an app key and an app link.
/// Blank strings count as missing.
pub fn validate_config(
    platform: Platform,
    config: &TruecallerConfig,
) -> VerificationResult<Credentials> {
    let missing = || VerificationError::configuration(platform.missing_credentials_message());

    match platform {
        Platform::Android => Ok(Credentials::Android {
            client_id: required(&config.android_client_id).ok_or_else(missing)?,
        }),
        Platform::Ios => Ok(Credentials::Ios {
            app_key: required(&config.ios_app_key).ok_or_else(missing)?,
            app_link: required(&config.ios_app_link).ok_or_else(missing)?,
        }),
    }
}

/// Present and not blank; the configured value is passed on unchanged
fn required(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|v| !v.trim().is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_android_requires_client_id() {
        let err = validate_config(Platform::Android, &TruecallerConfig::default()).unwrap_err();
        assert_eq!(
            err,
            VerificationError::configuration("Android client ID is required for Android platform")
        );

        let err = validate_config(Platform::Android, &TruecallerConfig::android("  ")).unwrap_err();
        assert_eq!(err.kind(), "configuration_error");
    }

    #[test]
    fn test_android_ignores_ios_fields() {
        let config = TruecallerConfig::ios("key", "https://link");
        assert!(validate_config(Platform::Android, &config).is_err());
        assert!(validate_config(Platform::Ios, &config).is_ok());
    }

    #[test]
    fn test_ios_requires_key_and_link() {
        let mut config = TruecallerConfig::ios("key", "https://link");
        config.ios_app_link = None;
        let err = validate_config(Platform::Ios, &config).unwrap_err();
        assert_eq!(err.to_string(), "iOS app key and app link are required for iOS platform");

        let mut config = TruecallerConfig::ios("key", "https://link");
        config.ios_app_key = None;
        assert!(validate_config(Platform::Ios, &config).is_err());
    }

    #[test]
    fn test_credentials_are_passed_through_unchanged() {
        let credentials =
            validate_config(Platform::Android, &TruecallerConfig::android(" client-1 ")).unwrap();
        assert_eq!(credentials, Credentials::Android { client_id: " client-1 ".into() });

        let credentials =
            validate_config(Platform::Ios, &TruecallerConfig::ios("key", "https://link")).unwrap();
        assert_eq!(
            credentials,
            Credentials::Ios { app_key: "key".into(), app_link: "https://link".into() }
        );
    }
}
