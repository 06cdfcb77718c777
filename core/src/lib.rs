//! # Truecaller Verify Core
//!
//! Verification workflow for the Truecaller phone-number SDK.
//! This crate contains domain entities, the orchestrator and its providers,
//! the traits implemented by native bridges and the OAuth API client, and the
//! error types surfaced through orchestrator state.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
