//! Flow drivers: one user action, one backend call, state transitions.
//!
//! Each driver takes the API through the [`PartMatchApi`] seam and the
//! state through [`StateHandle`], so the same code runs under the app's
//! signal-backed state and under plain `AppState` in tests. Errors stop
//! here: every failed call becomes its flow's fixed error toast and
//! nothing propagates further.

use tracing::{error, info};

use crate::api::{PartMatchApi, UploadFile};
use crate::state::{AppState, Severity, MSG_EMPTY_QUERY};
use crate::types::DocumentId;

/// Mutable access to the shared [`AppState`] without holding a borrow
/// across an await point.
///
/// The app implements this over its state signal (write-lock only for
/// the duration of the closure); tests use the blanket impl on
/// `AppState` itself.
pub trait StateHandle {
    fn with<R>(&mut self, f: impl FnOnce(&mut AppState) -> R) -> R;
}

impl StateHandle for AppState {
    fn with<R>(&mut self, f: impl FnOnce(&mut AppState) -> R) -> R {
        f(self)
    }
}

/// Fetches the document list and replaces the store with the answer.
///
/// Runs at controller startup and after every successful upload. A
/// failure leaves the current list on screen and raises an error toast.
pub async fn refresh_documents(api: &impl PartMatchApi, state: &mut impl StateHandle) {
    let seq = state.with(|s| s.begin_fetch());
    let outcome = api.list_documents().await;
    match &outcome {
        Ok(documents) => info!("Fetched {} documents", documents.len()),
        Err(err) => error!("Failed to fetch documents: {}", err),
    }
    state.with(|s| s.finish_fetch(seq, outcome));
}

/// Uploads one PDF, then refreshes the document list on success.
///
/// The refresh is triggered exactly once per successful upload; a
/// failed upload leaves the document list untouched.
pub async fn upload_document(
    api: &impl PartMatchApi,
    state: &mut impl StateHandle,
    file: UploadFile,
) {
    if !state.with(|s| s.begin_upload()) {
        return;
    }
    info!("Uploading {}", file.filename);
    let outcome = api.upload_document(file).await;
    if let Err(err) = &outcome {
        error!("Upload failed: {}", err);
    }
    let succeeded = outcome.is_ok();
    state.with(|s| s.finish_upload(outcome));
    if succeeded {
        refresh_documents(api, state).await;
    }
}

/// Runs line-item matching for one document and stores the outcome.
pub async fn run_batch_match(
    api: &impl PartMatchApi,
    state: &mut impl StateHandle,
    document_id: DocumentId,
) {
    let Some(seq) = state.with(|s| s.begin_match(&document_id)) else {
        return;
    };
    info!("Matching line items for document {}", document_id);
    let outcome = api.batch_match(&document_id).await;
    match &outcome {
        Ok(batch) => info!(
            "Matched {} of {} line items",
            batch.matched_items, batch.total_items
        ),
        Err(err) => error!("Batch match failed for {}: {}", document_id, err),
    }
    state.with(|s| s.finish_match(seq, outcome));
}

/// Matches one free-text description against the catalog.
///
/// A query that trims to empty never reaches the network: it raises a
/// warning toast and returns.
pub async fn search_part(api: &impl PartMatchApi, state: &mut impl StateHandle, query: String) {
    if query.trim().is_empty() {
        state.with(|s| {
            s.notify(MSG_EMPTY_QUERY, Severity::Warning);
        });
        return;
    }
    let Some(seq) = state.with(|s| s.begin_search()) else {
        return;
    };
    info!("Searching catalog for '{}'", query);
    let outcome = api.single_match(&query).await;
    if let Err(err) = &outcome {
        error!("Search failed: {}", err);
    }
    state.with(|s| s.finish_search(seq, outcome));
}
