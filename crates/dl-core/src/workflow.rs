//! Single-search session state machine.
//!
//! The session drives one search at a time through
//! `Idle → Searching → {Found, NotFound, Failed}`. A validated submit from
//! any state re-enters `Searching`, clearing the prior record and message
//! first. The in-flight flag is owned exclusively by the submit/finish pair:
//! it is raised when a submit is accepted and lowered on every completion
//! path, and a second submit is refused while it is raised.

use crate::query::{SearchQuery, ValidationError};
use crate::record::{DocumentCategory, PersonRecord};
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, info, warn};

/// User-facing message shown when form input fails validation.
pub const MSG_INCOMPLETE_FORM: &str = "Por favor completa todos los campos";
/// User-facing message shown for an empty lookup result.
pub const MSG_NOT_FOUND: &str = "Usuario no encontrado";
/// User-facing message shown when the lookup request fails.
pub const MSG_SEARCH_FAILED: &str = "Error al buscar el usuario";

/// Errors produced by session transitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("a search is already in flight")]
    SearchInFlight,

    #[error("invalid transition from {from:?} to {to:?}")]
    InvalidTransition {
        /// State the session was in when the transition was attempted.
        from: SearchState,
        /// State the transition would have entered.
        to: SearchState,
    },
}

/// Observable state of the search session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// No search has been submitted yet.
    Idle,
    /// A request is in flight; its outcome has not resolved.
    Searching,
    /// The last search returned a record, which is held and exportable.
    Found,
    /// The last search resolved with no matching record.
    NotFound,
    /// The last search failed at the transport or service level.
    Failed,
}

/// One form session: held categories, at most one held record, and the
/// current state of the search workflow.
#[derive(Debug, Default)]
pub struct SearchSession {
    state: SessionState,
    categories: Vec<DocumentCategory>,
}

#[derive(Debug)]
enum SessionState {
    Idle,
    Searching,
    Found {
        record: PersonRecord,
        retrieved_at: DateTime<Utc>,
    },
    NotFound,
    Failed,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Idle
    }
}

impl SearchSession {
    /// Creates an idle session with no categories loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the category list fetched once per session.
    pub fn set_categories(&mut self, categories: Vec<DocumentCategory>) {
        debug!(count = categories.len(), "document categories loaded");
        self.categories = categories;
    }

    /// Categories available to the form selector.
    pub fn categories(&self) -> &[DocumentCategory] {
        &self.categories
    }

    /// Current workflow state.
    pub fn state(&self) -> SearchState {
        match self.state {
            SessionState::Idle => SearchState::Idle,
            SessionState::Searching => SearchState::Searching,
            SessionState::Found { .. } => SearchState::Found,
            SessionState::NotFound => SearchState::NotFound,
            SessionState::Failed => SearchState::Failed,
        }
    }

    /// The held record, present only in [`SearchState::Found`].
    pub fn record(&self) -> Option<&PersonRecord> {
        match &self.state {
            SessionState::Found { record, .. } => Some(record),
            _ => None,
        }
    }

    /// When the held record was retrieved, present only in
    /// [`SearchState::Found`].
    pub fn retrieved_at(&self) -> Option<DateTime<Utc>> {
        match &self.state {
            SessionState::Found { retrieved_at, .. } => Some(*retrieved_at),
            _ => None,
        }
    }

    /// User-facing message for the current state, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self.state {
            SessionState::NotFound => Some(MSG_NOT_FOUND),
            SessionState::Failed => Some(MSG_SEARCH_FAILED),
            _ => None,
        }
    }

    /// Whether a submitted search has not yet resolved.
    pub fn in_flight(&self) -> bool {
        matches!(self.state, SessionState::Searching)
    }

    /// Validates form input and, if well-formed, enters `Searching`.
    ///
    /// Clears any prior record and message before the request is dispatched.
    /// Validation failure leaves the session state untouched and must not
    /// result in a network call. Refused while a search is in flight.
    pub fn submit(
        &mut self,
        raw_category: Option<i64>,
        raw_number: &str,
    ) -> Result<SearchQuery, WorkflowError> {
        if self.in_flight() {
            warn!("submit refused: a search is already in flight");
            return Err(WorkflowError::SearchInFlight);
        }

        let query = SearchQuery::parse(raw_category, raw_number)?;
        info!(
            document_number = query.document_number,
            category_id = query.category_id,
            "search submitted"
        );
        self.state = SessionState::Searching;
        Ok(query)
    }

    /// Resolves the in-flight search with a returned record.
    ///
    /// Only `Searching` may resolve to a terminal state: completion from any
    /// other state is rejected and leaves the session untouched.
    pub fn finish_found(&mut self, record: PersonRecord) -> Result<(), WorkflowError> {
        self.check_resolvable(SearchState::Found)?;
        info!(document_number = record.document_number, "search found a record");
        self.state = SessionState::Found {
            record,
            retrieved_at: Utc::now(),
        };
        Ok(())
    }

    /// Resolves the in-flight search with an empty result.
    pub fn finish_not_found(&mut self) -> Result<(), WorkflowError> {
        self.check_resolvable(SearchState::NotFound)?;
        info!("search resolved with no matching record");
        self.state = SessionState::NotFound;
        Ok(())
    }

    /// Resolves the in-flight search with a request failure.
    ///
    /// The root cause is the caller's to log; the session only keeps the
    /// generic user-facing message.
    pub fn finish_failed(&mut self) -> Result<(), WorkflowError> {
        self.check_resolvable(SearchState::Failed)?;
        info!("search resolved with a request failure");
        self.state = SessionState::Failed;
        Ok(())
    }

    fn check_resolvable(&self, to: SearchState) -> Result<(), WorkflowError> {
        if self.in_flight() {
            return Ok(());
        }
        let from = self.state();
        warn!(?from, ?to, "completion rejected: no search is in flight");
        Err(WorkflowError::InvalidTransition { from, to })
    }
}
