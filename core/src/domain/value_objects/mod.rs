//! Value objects representing immutable domain concepts.

pub mod platform;
pub mod verification_state;

// Re-export commonly used types
pub use platform::Platform;
pub use verification_state::{OrchestratorState, VerificationPhase};
