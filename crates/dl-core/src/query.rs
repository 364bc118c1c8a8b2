//! Search-input validation.
//!
//! A [`SearchQuery`] can only be built through [`SearchQuery::parse`], so a
//! query that reaches the client is guaranteed well-formed and no request is
//! ever dispatched for incomplete form input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while validating raw search-form input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no document category selected")]
    MissingCategory,

    #[error("document number is empty")]
    MissingDocumentNumber,

    #[error("document number '{0}' is not a valid integer")]
    InvalidDocumentNumber(String),
}

/// A validated search request: category selection plus document number.
///
/// Transient; built per submit and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Selected document category.
    pub category_id: i64,
    /// Document number to look up.
    pub document_number: i64,
}

impl SearchQuery {
    /// Validates raw form input into a dispatchable query.
    ///
    /// `raw_category` is the selector value (`None` when nothing is chosen)
    /// and `raw_number` the free-text document-number field. Both are
    /// required; the number must parse as an integer.
    pub fn parse(raw_category: Option<i64>, raw_number: &str) -> Result<Self, ValidationError> {
        let category_id = raw_category.ok_or(ValidationError::MissingCategory)?;

        let trimmed = raw_number.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingDocumentNumber);
        }

        let document_number = trimmed
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidDocumentNumber(trimmed.to_string()))?;

        Ok(Self {
            category_id,
            document_number,
        })
    }
}
