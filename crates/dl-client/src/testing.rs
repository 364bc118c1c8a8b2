//! Test fixtures shared by this crate's tests and downstream crates.

use crate::config::ClientConfig;
use dl_core::record::{DocumentCategory, PersonRecord};

/// Creates a client config pointing at a test endpoint.
pub fn test_client_config(base_url: &str) -> ClientConfig {
    ClientConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
    }
}

/// Creates a sample person record for the given document number.
pub fn sample_record(document_number: i64) -> PersonRecord {
    PersonRecord {
        document_number,
        first_name: "Ana".to_string(),
        last_name: "Ruiz".to_string(),
        email: "ana@x.com".to_string(),
        phone: 5550001,
    }
}

/// Creates a small sample category list.
pub fn sample_categories() -> Vec<DocumentCategory> {
    vec![
        DocumentCategory {
            id: 1,
            name: "DNI".to_string(),
        },
        DocumentCategory {
            id: 2,
            name: "Pasaporte".to_string(),
        },
    ]
}
