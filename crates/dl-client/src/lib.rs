//! # dl-client
//!
//! The Lookup Client: stateless async wrappers over the two read-only
//! endpoints of the remote record service, plus an in-process mock for
//! tests and offline demos.
//!
//! The contract callers rely on:
//! - category listing never fails: any failure collapses to an empty list;
//! - a 404 on the person lookup is a normal "not found" outcome (`Ok(None)`),
//!   while transport failures and other non-2xx statuses are errors.

pub mod config;
pub mod http;
pub mod lookup;
pub mod mock;
pub mod testing;

pub use config::ClientConfig;
pub use lookup::{LookupClient, LookupError, RecordLookup};
pub use mock::MockRecordLookup;
