//! # dl-core
//!
//! Domain types and the search workflow for doclook.
//!
//! This crate has no I/O: it defines the wire models returned by the record
//! service, the response envelope, search-input validation, and the
//! single-search session state machine. Network access lives in `dl-client`
//! and artifact encoding in `dl-export`.

pub mod envelope;
pub mod query;
pub mod record;
pub mod workflow;

pub use envelope::{ApiEnvelope, ApiErrorBody};
pub use query::{SearchQuery, ValidationError};
pub use record::{DocumentCategory, PersonRecord};
pub use workflow::{SearchSession, SearchState, WorkflowError};
