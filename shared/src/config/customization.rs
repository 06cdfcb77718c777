//! Android consent screen customizations
//!
//! Every option serializes to the `TRUECALLER_ANDROID_*` wire value understood
//! by the native module.

use serde::{Deserialize, Serialize};

/// Text displayed on the primary Truecaller button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ButtonText {
    #[default]
    #[serde(rename = "TRUECALLER_ANDROID_BUTTON_TEXT_ACCEPT")]
    Accept,
    #[serde(rename = "TRUECALLER_ANDROID_BUTTON_TEXT_CONFIRM")]
    Confirm,
    #[serde(rename = "TRUECALLER_ANDROID_BUTTON_TEXT_PROCEED")]
    Proceed,
    #[serde(rename = "TRUECALLER_ANDROID_BUTTON_TEXT_CONTINUE")]
    Continue,
}

impl ButtonText {
    pub const ALL: [ButtonText; 4] = [
        ButtonText::Accept,
        ButtonText::Confirm,
        ButtonText::Proceed,
        ButtonText::Continue,
    ];

    pub fn wire_value(&self) -> &'static str {
        match self {
            ButtonText::Accept => "TRUECALLER_ANDROID_BUTTON_TEXT_ACCEPT",
            ButtonText::Confirm => "TRUECALLER_ANDROID_BUTTON_TEXT_CONFIRM",
            ButtonText::Proceed => "TRUECALLER_ANDROID_BUTTON_TEXT_PROCEED",
            ButtonText::Continue => "TRUECALLER_ANDROID_BUTTON_TEXT_CONTINUE",
        }
    }
}

/// Shape of the primary Truecaller button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ButtonShape {
    #[default]
    #[serde(rename = "TRUECALLER_ANDROID_BUTTON_ROUNDED")]
    Rounded,
    #[serde(rename = "TRUECALLER_ANDROID_BUTTON_RECTANGLE")]
    Rectangle,
}

impl ButtonShape {
    pub fn wire_value(&self) -> &'static str {
        match self {
            ButtonShape::Rounded => "TRUECALLER_ANDROID_BUTTON_ROUNDED",
            ButtonShape::Rectangle => "TRUECALLER_ANDROID_BUTTON_RECTANGLE",
        }
    }
}

/// Secondary (footer) button text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FooterText {
    #[default]
    #[serde(rename = "TRUECALLER_ANDROID_FOOTER_BUTTON_TEXT_SKIP")]
    Skip,
    #[serde(rename = "TRUECALLER_ANDROID_FOOTER_BUTTON_TEXT_ANOTHER_MOBILE_NUMBER")]
    AnotherMobileNumber,
    #[serde(rename = "TRUECALLER_ANDROID_FOOTER_BUTTON_TEXT_ANOTHER_METHOD")]
    AnotherMethod,
    #[serde(rename = "TRUECALLER_ANDROID_FOOTER_BUTTON_TEXT_MANUALLY")]
    Manually,
    #[serde(rename = "TRUECALLER_ANDROID_FOOTER_BUTTON_TEXT_LATER")]
    Later,
}

impl FooterText {
    pub fn wire_value(&self) -> &'static str {
        match self {
            FooterText::Skip => "TRUECALLER_ANDROID_FOOTER_BUTTON_TEXT_SKIP",
            FooterText::AnotherMobileNumber => {
                "TRUECALLER_ANDROID_FOOTER_BUTTON_TEXT_ANOTHER_MOBILE_NUMBER"
            }
            FooterText::AnotherMethod => "TRUECALLER_ANDROID_FOOTER_BUTTON_TEXT_ANOTHER_METHOD",
            FooterText::Manually => "TRUECALLER_ANDROID_FOOTER_BUTTON_TEXT_MANUALLY",
            FooterText::Later => "TRUECALLER_ANDROID_FOOTER_BUTTON_TEXT_LATER",
        }
    }
}

macro_rules! consent_headings {
    ($($variant:ident => $wire:literal),+ $(,)?) => {
        /// Heading shown on the consent screen
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        pub enum ConsentHeading {
            #[default]
            #[serde(rename = "TRUECALLER_ANDROID_CONSENT_HEADING_TEXT_LOG_IN_TO")]
            LogInTo,
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl ConsentHeading {
            pub fn wire_value(&self) -> &'static str {
                match self {
                    ConsentHeading::LogInTo => "TRUECALLER_ANDROID_CONSENT_HEADING_TEXT_LOG_IN_TO",
                    $(ConsentHeading::$variant => $wire,)+
                }
            }
        }
    };
}

consent_headings! {
    SignUpWith => "TRUECALLER_ANDROID_CONSENT_HEADING_TEXT_SIGN_UP_WITH",
    SignInTo => "TRUECALLER_ANDROID_CONSENT_HEADING_TEXT_SIGN_IN_TO",
    VerifyNumberWith => "TRUECALLER_ANDROID_CONSENT_HEADING_TEXT_VERIFY_NUMBER_WITH",
    RegisterWith => "TRUECALLER_ANDROID_CONSENT_HEADING_TEXT_REGISTER_WITH",
    GetStartedWith => "TRUECALLER_ANDROID_CONSENT_HEADING_TEXT_GET_STARTED_WITH",
    ProceedWith => "TRUECALLER_ANDROID_CONSENT_HEADING_TEXT_PROCEED_WITH",
    VerifyWith => "TRUECALLER_ANDROID_CONSENT_HEADING_TEXT_VERIFY_WITH",
    VerifyProfileWith => "TRUECALLER_ANDROID_CONSENT_HEADING_TEXT_VERIFY_PROFILE_WITH",
    VerifyYourProfileWith => "TRUECALLER_ANDROID_CONSENT_HEADING_TEXT_VERIFY_YOUR_PROFILE_WITH",
    VerifyPhoneNoWith => "TRUECALLER_ANDROID_CONSENT_HEADING_TEXT_VERIFY_PHONE_NO_WITH",
    VerifyYourNoWith => "TRUECALLER_ANDROID_CONSENT_HEADING_TEXT_VERIFY_YOUR_NO_WITH",
    ContinueWith => "TRUECALLER_ANDROID_CONSENT_HEADING_TEXT_CONTINUE_WITH",
    CompleteOrderWith => "TRUECALLER_ANDROID_CONSENT_HEADING_TEXT_COMPLETE_ORDER_WITH",
    PlaceOrderWith => "TRUECALLER_ANDROID_CONSENT_HEADING_TEXT_PLACE_ORDER_WITH",
    CompleteBookingWith => "TRUECALLER_ANDROID_CONSENT_HEADING_TEXT_COMPLETE_BOOKING_WITH",
    CheckoutWith => "TRUECALLER_ANDROID_CONSENT_HEADING_TEXT_CHECKOUT_WITH",
    ManageDetailsWith => "TRUECALLER_ANDROID_CONSENT_HEADING_TEXT_MANAGE_DETAILS_WITH",
    ManageYourDetailsWith => "TRUECALLER_ANDROID_CONSENT_HEADING_TEXT_MANAGE_YOUR_DETAILS_WITH",
    LoginToWithOneTap => "TRUECALLER_ANDROID_CONSENT_HEADING_TEXT_LOGIN_TO_WITH_ONE_TAP",
    SubscribeTo => "TRUECALLER_ANDROID_CONSENT_HEADING_TEXT_SUBSCRIBE_TO",
    GetUpdatesFrom => "TRUECALLER_ANDROID_CONSENT_HEADING_TEXT_GET_UPDATES_FROM",
    ContinueReadingOn => "TRUECALLER_ANDROID_CONSENT_HEADING_TEXT_CONTINUE_READING_ON",
    GetNewUpdatesFrom => "TRUECALLER_ANDROID_CONSENT_HEADING_TEXT_GET_NEW_UPDATES_FROM",
    LoginSignupWith => "TRUECALLER_ANDROID_CONSENT_HEADING_TEXT_LOGIN_SIGNUP_WITH",
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_native_fallbacks() {
        assert_eq!(ButtonText::default(), ButtonText::Accept);
        assert_eq!(ButtonShape::default(), ButtonShape::Rounded);
        assert_eq!(FooterText::default(), FooterText::Skip);
        assert_eq!(ConsentHeading::default(), ConsentHeading::LogInTo);
    }

    #[test]
    fn test_serde_uses_wire_values() {
        let json = serde_json::to_string(&ConsentHeading::CheckoutWith).unwrap();
        assert_eq!(json, "\"TRUECALLER_ANDROID_CONSENT_HEADING_TEXT_CHECKOUT_WITH\"");

        let shape: ButtonShape =
            serde_json::from_str("\"TRUECALLER_ANDROID_BUTTON_RECTANGLE\"").unwrap();
        assert_eq!(shape, ButtonShape::Rectangle);
    }

    #[test]
    fn test_wire_value_agrees_with_serde() {
        for text in ButtonText::ALL {
            let json = serde_json::to_string(&text).unwrap();
            assert_eq!(json, format!("\"{}\"", text.wire_value()));
        }
        let json = serde_json::to_string(&FooterText::AnotherMethod).unwrap();
        assert_eq!(json, format!("\"{}\"", FooterText::AnotherMethod.wire_value()));
    }
}
