//! Truecaller OAuth integration

pub mod truecaller;

pub use truecaller::TruecallerApiClient;
