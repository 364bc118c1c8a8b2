//! End-to-end workflow tests: validated submit, lookup resolution, and the
//! export guard, driven through the session state machine with the
//! in-process mock lookup.

use dl_client::testing::{sample_categories, sample_record};
use dl_client::{LookupError, MockRecordLookup, RecordLookup};
use dl_core::workflow::{SearchSession, SearchState, MSG_NOT_FOUND, MSG_SEARCH_FAILED};
use dl_export::{export, ExportFormat};

async fn resolve(session: &mut SearchSession, lookup: &MockRecordLookup, document_number: i64) {
    match lookup.search_by_document_number(document_number).await {
        Ok(Some(record)) => session.finish_found(record).unwrap(),
        Ok(None) => session.finish_not_found().unwrap(),
        Err(_) => session.finish_failed().unwrap(),
    }
}

/// A successful search ends in `Found` and the csv export carries the
/// deterministic name.
#[tokio::test]
async fn found_record_is_exportable_as_csv() {
    let lookup = MockRecordLookup::new();
    lookup.insert_record(sample_record(12345678)).await;

    let mut session = SearchSession::new();
    session.set_categories(lookup.fetch_document_categories().await);

    let query = session.submit(Some(1), "12345678").unwrap();
    resolve(&mut session, &lookup, query.document_number).await;

    assert_eq!(session.state(), SearchState::Found);
    let artifact = export(session.record(), ExportFormat::Csv).unwrap();
    assert_eq!(artifact.file_name, "Usuario_12345678.csv");

    let text = String::from_utf8(artifact.bytes).unwrap();
    assert_eq!(
        text.lines().next().unwrap(),
        "Nombre,Apellido,Documento,Email,Teléfono"
    );
    assert_eq!(
        text.lines().nth(1).unwrap(),
        "Ana,Ruiz,12345678,ana@x.com,5550001"
    );
}

/// All three artifacts are produced for a held record, each with its
/// extension.
#[tokio::test]
async fn found_record_exports_in_all_three_formats() {
    let lookup = MockRecordLookup::new();
    lookup.insert_record(sample_record(42)).await;

    let mut session = SearchSession::new();
    session.submit(Some(1), "42").unwrap();
    resolve(&mut session, &lookup, 42).await;

    for format in [ExportFormat::Workbook, ExportFormat::Csv, ExportFormat::Text] {
        let artifact = export(session.record(), format).unwrap();
        assert_eq!(
            artifact.file_name,
            format!("Usuario_42.{}", format.extension())
        );
    }
}

/// The plain-text artifact's generation timestamp is never earlier than the
/// record's retrieval time.
#[tokio::test]
async fn text_export_timestamp_is_at_or_after_retrieval() {
    let lookup = MockRecordLookup::new();
    lookup.insert_record(sample_record(7)).await;

    let mut session = SearchSession::new();
    session.submit(Some(1), "7").unwrap();
    resolve(&mut session, &lookup, 7).await;

    let retrieved_at = session.retrieved_at().unwrap();
    let artifact = export(session.record(), ExportFormat::Text).unwrap();
    let text = String::from_utf8(artifact.bytes).unwrap();
    let stamp = text
        .lines()
        .last()
        .unwrap()
        .strip_prefix("Generado el: ")
        .unwrap();

    let generated = chrono::NaiveDateTime::parse_from_str(stamp, dl_export::text::TIMESTAMP_FORMAT)
        .unwrap()
        .and_local_timezone(chrono::Local)
        .single()
        .unwrap();

    // The rendered stamp truncates to whole seconds.
    assert!(generated.timestamp() >= retrieved_at.timestamp() - 1);
}

/// A 404-style empty result ends in `NotFound` with no exportable record.
#[tokio::test]
async fn missing_record_yields_not_found_and_no_export() {
    let lookup = MockRecordLookup::new();

    let mut session = SearchSession::new();
    session.submit(Some(1), "99999999").unwrap();
    resolve(&mut session, &lookup, 99999999).await;

    assert_eq!(session.state(), SearchState::NotFound);
    assert_eq!(session.message(), Some(MSG_NOT_FOUND));
    for format in [ExportFormat::Workbook, ExportFormat::Csv, ExportFormat::Text] {
        assert!(export(session.record(), format).is_none());
    }
}

/// A server failure ends in `Failed` with the generic message and nothing
/// exportable.
#[tokio::test]
async fn lookup_failure_yields_failed_and_no_export() {
    let lookup = MockRecordLookup::new();
    lookup
        .fail_searches_with(LookupError::UnexpectedStatus(500))
        .await;

    let mut session = SearchSession::new();
    session.submit(Some(1), "12345678").unwrap();
    resolve(&mut session, &lookup, 12345678).await;

    assert_eq!(session.state(), SearchState::Failed);
    assert_eq!(session.message(), Some(MSG_SEARCH_FAILED));
    assert!(export(session.record(), ExportFormat::Csv).is_none());
}

/// Invalid form input never dispatches a request.
#[tokio::test]
async fn validation_failure_dispatches_no_request() {
    let lookup = MockRecordLookup::new();
    lookup.insert_record(sample_record(12345678)).await;

    let mut session = SearchSession::new();
    assert!(session.submit(Some(1), "").is_err());
    assert!(session.submit(None, "12345678").is_err());
    assert!(session.submit(Some(1), "12a45").is_err());

    assert_eq!(lookup.search_call_count(), 0);
    assert_eq!(session.state(), SearchState::Idle);
}

/// A new validated submit clears the previous result before resolving.
#[tokio::test]
async fn resubmit_clears_previous_record() {
    let lookup = MockRecordLookup::new();
    lookup.insert_record(sample_record(1)).await;
    lookup.set_categories(sample_categories()).await;

    let mut session = SearchSession::new();
    session.set_categories(lookup.fetch_document_categories().await);
    assert_eq!(session.categories().len(), 2);

    session.submit(Some(1), "1").unwrap();
    resolve(&mut session, &lookup, 1).await;
    assert_eq!(session.state(), SearchState::Found);

    session.submit(Some(1), "2").unwrap();
    assert_eq!(session.state(), SearchState::Searching);
    assert!(session.record().is_none());
    assert!(export(session.record(), ExportFormat::Csv).is_none());

    resolve(&mut session, &lookup, 2).await;
    assert_eq!(session.state(), SearchState::NotFound);
}
