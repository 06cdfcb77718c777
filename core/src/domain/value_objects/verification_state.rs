//! Observable orchestrator state

use serde::{Deserialize, Serialize};

use crate::domain::entities::profile::CanonicalProfile;

/// Lifecycle phase of the orchestrator
///
/// `Uninitialized → Initializing → Initialized → (Requesting → Resolved|Failed)*`.
/// `Resolved` and `Failed` accept a new request; a failed initialization
/// returns to `Uninitialized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationPhase {
    #[default]
    Uninitialized,
    Initializing,
    Initialized,
    Requesting,
    Resolved,
    Failed,
}

/// State observed by the caller after every operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrchestratorState {
    pub profile: Option<CanonicalProfile>,
    pub error: Option<String>,
    pub initialized: bool,
    pub phase: VerificationPhase,
}
