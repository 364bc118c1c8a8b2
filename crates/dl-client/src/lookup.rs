//! The lookup operations and their error taxonomy.

use crate::config::ClientConfig;
use crate::http::HttpClient;
use async_trait::async_trait;
use dl_core::envelope::ApiEnvelope;
use dl_core::record::{DocumentCategory, PersonRecord};
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Errors raised by the person lookup.
///
/// "Not found" is deliberately not represented here: an absent record is a
/// normal outcome and surfaces as `Ok(None)`, never as an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// The two read-only operations against the record service.
///
/// `LookupClient` is the HTTP implementation;
/// [`MockRecordLookup`](crate::MockRecordLookup) is the in-process double.
#[async_trait]
pub trait RecordLookup: Send + Sync {
    /// Lists the known document categories.
    ///
    /// Never fails: any transport failure or non-2xx status collapses to an
    /// empty list, logged only. The category list is not on the critical
    /// path of a search.
    async fn fetch_document_categories(&self) -> Vec<DocumentCategory>;

    /// Looks up a person by document number.
    ///
    /// `Ok(None)` means the service answered 404 or returned an empty
    /// envelope: no such person, not a failure. Errors are reserved for
    /// transport failures and unexpected status codes.
    async fn search_by_document_number(
        &self,
        document_number: i64,
    ) -> Result<Option<PersonRecord>, LookupError>;
}

/// HTTP implementation of [`RecordLookup`].
///
/// Stateless: holds only the configured HTTP client, no session data.
pub struct LookupClient {
    http: HttpClient,
}

impl LookupClient {
    /// Creates a client for the configured record service.
    pub fn new(config: ClientConfig) -> Result<Self, LookupError> {
        let http = HttpClient::new(&config)?;
        info!(base_url = %http.base_url(), "lookup client initialized");
        Ok(Self { http })
    }

    async fn try_fetch_document_categories(&self) -> Result<Vec<DocumentCategory>, LookupError> {
        let response = self.http.get("/document-types").await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::UnexpectedStatus(status.as_u16()));
        }

        let envelope: ApiEnvelope<Vec<DocumentCategory>> = HttpClient::read_json(response).await?;
        Ok(envelope.into_data().unwrap_or_default())
    }
}

#[async_trait]
impl RecordLookup for LookupClient {
    #[instrument(skip(self))]
    async fn fetch_document_categories(&self) -> Vec<DocumentCategory> {
        match self.try_fetch_document_categories().await {
            Ok(categories) => categories,
            Err(err) => {
                warn!(error = %err, "failed to fetch document categories, using empty list");
                Vec::new()
            }
        }
    }

    #[instrument(skip(self))]
    async fn search_by_document_number(
        &self,
        document_number: i64,
    ) -> Result<Option<PersonRecord>, LookupError> {
        let path = format!("/users/dni/{}", document_number);
        let response = self.http.get(&path).await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(LookupError::UnexpectedStatus(status.as_u16()));
        }

        let envelope: ApiEnvelope<PersonRecord> = HttpClient::read_json(response).await?;
        Ok(envelope.into_data())
    }
}
