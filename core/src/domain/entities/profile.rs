//! Verified user profile entities

use serde::{Deserialize, Serialize};

/// Normalized profile returned to callers, independent of the producing platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalProfile {
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone_number: String,
    pub country_code: String,
    pub gender: Option<String>,
    pub email: Option<String>,
}

/// Profile fields delivered directly by the iOS SDK success event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectProfilePayload {
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    pub phone_number: String,
    pub country_code: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<DirectProfilePayload> for CanonicalProfile {
    fn from(payload: DirectProfilePayload) -> Self {
        Self {
            first_name: payload.first_name,
            last_name: payload.last_name,
            phone_number: payload.phone_number,
            country_code: payload.country_code,
            gender: payload.gender,
            email: payload.email,
        }
    }
}

/// Body of the OAuth user-info endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfoResponse {
    pub given_name: String,
    #[serde(default)]
    pub family_name: Option<String>,
    pub phone_number: String,
    pub phone_number_country_code: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<UserInfoResponse> for CanonicalProfile {
    fn from(info: UserInfoResponse) -> Self {
        Self {
            first_name: info.given_name,
            last_name: info.family_name,
            phone_number: info.phone_number,
            country_code: info.phone_number_country_code,
            gender: info.gender,
            email: info.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_field_mapping() {
        let info: UserInfoResponse = serde_json::from_str(
            r#"{
                "sub": "123",
                "given_name": "Asha",
                "family_name": "Rao",
                "phone_number": "919876543210",
                "phone_number_country_code": "IN",
                "gender": "female",
                "email": "asha@example.com"
            }"#,
        )
        .unwrap();

        let profile = CanonicalProfile::from(info);
        assert_eq!(profile.first_name, "Asha");
        assert_eq!(profile.last_name.as_deref(), Some("Rao"));
        assert_eq!(profile.phone_number, "919876543210");
        assert_eq!(profile.country_code, "IN");
        assert_eq!(profile.gender.as_deref(), Some("female"));
        assert_eq!(profile.email.as_deref(), Some("asha@example.com"));
    }

    #[test]
    fn test_user_info_optional_fields_may_be_absent() {
        let info: UserInfoResponse = serde_json::from_str(
            r#"{"given_name": "A", "phone_number": "1555", "phone_number_country_code": "US"}"#,
        )
        .unwrap();
        let profile = CanonicalProfile::from(info);
        assert!(profile.last_name.is_none());
        assert!(profile.gender.is_none());
        assert!(profile.email.is_none());
    }

    #[test]
    fn test_canonical_profile_serializes_camel_case() {
        let profile = CanonicalProfile {
            first_name: "A".into(),
            last_name: None,
            phone_number: "+1555".into(),
            country_code: "US".into(),
            gender: None,
            email: None,
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["firstName"], "A");
        assert_eq!(json["countryCode"], "US");
        assert!(json["lastName"].is_null());
    }
}
