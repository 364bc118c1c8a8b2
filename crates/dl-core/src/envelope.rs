//! The `{data, error}` envelope the record service wraps around every response.
//!
//! Modeled as a typed boundary so "absent data" and "transport failure" stay
//! distinguishable at every call site instead of collapsing into a loosely
//! typed JSON value.

use serde::{Deserialize, Serialize};

/// Response envelope used by the record service for all endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Payload of a successful operation. `None` means "no such resource",
    /// which is a normal outcome for lookups, not a failure.
    pub data: Option<T>,
    /// Error detail attached by the service, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorBody>,
}

/// Error body carried inside the envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable error message from the service.
    pub message: String,
    /// Optional additional detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Consumes the envelope and returns its payload, if present.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}
