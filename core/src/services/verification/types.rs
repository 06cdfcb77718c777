//! Types passed between native listeners and the orchestrator

use serde_json::Value;

/// Native event forwarded by a subscribed listener
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderEvent {
    Success(Value),
    Failure(Value),
}
