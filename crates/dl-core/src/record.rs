//! Wire models for the remote record service.

use serde::{Deserialize, Serialize};

/// A class of identification document (e.g. passport, national ID).
///
/// Sourced entirely from the remote service; never mutated locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentCategory {
    /// Service-assigned category identifier.
    pub id: i64,
    /// Human-readable category name.
    pub name: String,
}

/// The single person entity returned by a successful document-number lookup.
///
/// Replaced wholesale on each new search; carries no identity beyond
/// `document_number` and is never persisted across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    /// National document number.
    pub document_number: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number, stored as digits by the service.
    pub phone: i64,
}
