//! End-to-end tests for complete user sessions against the public API.
//!
//! These tests exercise the full workflow the way the app drives it:
//! 1. Startup: initial document fetch fills the store
//! 2. Upload: file upload followed by the automatic refresh
//! 3. Batch match: per-document matching, view switch, sub-tab selection
//! 4. Search: free-text lookup with the client-side confidence policy
//!
//! The backend is scripted per scenario; only `partmatch-core`'s public
//! surface is touched, so these double as a check that the crate exposes
//! everything the app needs.

use std::cell::RefCell;

use async_trait::async_trait;

use partmatch_core::api::{PartMatchApi, UploadFile};
use partmatch_core::flows;
use partmatch_core::state::{AppState, Busy, ResultsTab, Severity, Tab};
use partmatch_core::types::{
    BatchMatchResponse, Document, DocumentId, LineItem, MatchCandidate, MatchResult,
    SingleSearchResponse,
};
use partmatch_core::ApiError;

// ============================================================================
// Scripted backend
// ============================================================================

/// Backend double that replays a fixed answer per endpoint. Document
/// lists are consumed in order so a scenario can serve different answers
/// to the startup fetch and the post-upload refresh.
#[derive(Default)]
struct ScriptedBackend {
    document_lists: RefCell<Vec<Result<Vec<Document>, ApiError>>>,
    upload: Option<ApiError>,
    batch: Option<Result<BatchMatchResponse, ApiError>>,
    search: Option<Result<SingleSearchResponse, ApiError>>,
}

#[async_trait(?Send)]
impl PartMatchApi for ScriptedBackend {
    async fn list_documents(&self) -> Result<Vec<Document>, ApiError> {
        let mut lists = self.document_lists.borrow_mut();
        if lists.is_empty() {
            Ok(vec![])
        } else {
            lists.remove(0)
        }
    }

    async fn upload_document(&self, _file: UploadFile) -> Result<(), ApiError> {
        match &self.upload {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn batch_match(
        &self,
        _document_id: &DocumentId,
    ) -> Result<BatchMatchResponse, ApiError> {
        self.batch
            .clone()
            .unwrap_or_else(|| Err(ApiError::Status(404)))
    }

    async fn single_match(&self, _description: &str) -> Result<SingleSearchResponse, ApiError> {
        self.search
            .clone()
            .unwrap_or_else(|| Err(ApiError::Status(404)))
    }
}

// ============================================================================
// Fixtures
// ============================================================================

fn invoice(id: &str, filename: &str, status: &str) -> Document {
    Document {
        id: DocumentId::new(id),
        filename: filename.into(),
        upload_date: "2025-05-07T14:32:11.512000".into(),
        status: status.into(),
    }
}

fn line(line_number: u32, description: &str) -> LineItem {
    LineItem {
        line_number,
        description: description.into(),
    }
}

fn matched_line(line_number: u32, description: &str, part: &str, score: f64) -> MatchResult {
    MatchResult {
        line_item: line(line_number, description),
        matched: true,
        score,
        best_match: Some(MatchCandidate {
            part_number: part.into(),
            description: format!("{} (catalog)", description),
        }),
    }
}

fn unmatched_line(line_number: u32, description: &str) -> MatchResult {
    MatchResult {
        line_item: line(line_number, description),
        matched: false,
        score: 0.0,
        best_match: None,
    }
}

fn batch_for(id: &str, matches: Vec<MatchResult>) -> BatchMatchResponse {
    let matched_items = matches.iter().filter(|m| m.matched).count() as u32;
    let total_items = matches.len() as u32;
    BatchMatchResponse {
        document_id: DocumentId::new(id),
        total_items,
        matched_items,
        match_rate: if total_items > 0 {
            f64::from(matched_items) / f64::from(total_items)
        } else {
            0.0
        },
        matches,
    }
}

fn confident_hit(query: &str, score: f64) -> SingleSearchResponse {
    SingleSearchResponse {
        invoice_description: Some(query.into()),
        matched: "Yes".into(),
        similarity_score: score,
        part_description: Some("Widget A".into()),
        document_type: Some("Invoice".into()),
        document_id: Some("D-100".into()),
        part_id: Some("P-200".into()),
        unit_of_measure: Some("EA".into()),
    }
}

fn pdf(name: &str) -> UploadFile {
    UploadFile {
        filename: name.into(),
        bytes: b"%PDF-1.4 test".to_vec(),
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn full_session_upload_match_search() {
    let backend = ScriptedBackend {
        document_lists: RefCell::new(vec![
            Ok(vec![invoice("doc-1", "march.pdf", "processed")]),
            Ok(vec![
                invoice("doc-1", "march.pdf", "processed"),
                invoice("doc-2", "april.pdf", "pending"),
            ]),
        ]),
        batch: Some(Ok(batch_for(
            "doc-2",
            vec![
                matched_line(1, "Hex bolt M8x40", "HB-8040", 0.91),
                matched_line(2, "Washer 8mm", "WA-080", 0.77),
                unmatched_line(3, "Mystery bracket"),
            ],
        ))),
        search: Some(Ok(confident_hit("stainless steel widget", 0.82))),
        ..ScriptedBackend::default()
    };
    let mut state = AppState::new();

    // Startup fetch.
    flows::refresh_documents(&backend, &mut state).await;
    assert_eq!(state.documents().len(), 1);
    assert_eq!(state.tab(), Tab::Documents);
    assert!(!state.can_open_results());

    // Upload; the follow-up refresh picks up the new document.
    flows::upload_document(&backend, &mut state, pdf("april.pdf")).await;
    assert_eq!(state.documents().len(), 2);
    assert_eq!(state.documents()[1].status, "pending");
    assert_eq!(state.busy(), &Busy::Idle);

    // Batch match jumps to the results view on the matched sub-tab.
    flows::run_batch_match(&backend, &mut state, DocumentId::new("doc-2")).await;
    assert_eq!(state.tab(), Tab::Results);
    assert_eq!(state.results_tab(), ResultsTab::Matched);
    let batch = state.batch().expect("batch stored");
    assert_eq!(batch.matched_items, 2);
    assert_eq!(batch.total_items, 3);
    assert!(state.can_select_results_tab(ResultsTab::Unmatched));

    // Search; the stored result clears the confidence policy.
    state.select_tab(Tab::Search);
    flows::search_part(&backend, &mut state, "stainless steel widget".into()).await;
    let hit = state.search_result().expect("search stored");
    assert!(hit.is_confident_match());
    assert_eq!(hit.part_description.as_deref(), Some("Widget A"));
    assert_eq!(state.busy(), &Busy::Idle);
}

#[tokio::test]
async fn every_failure_leaves_the_session_usable() {
    let seeded = ScriptedBackend {
        document_lists: RefCell::new(vec![Ok(vec![invoice("doc-1", "march.pdf", "processed")])]),
        ..ScriptedBackend::default()
    };
    let mut state = AppState::new();
    flows::refresh_documents(&seeded, &mut state).await;

    let broken = ScriptedBackend {
        document_lists: RefCell::new(vec![Err(ApiError::Status(500))]),
        upload: Some(ApiError::Transport("connection reset".into())),
        batch: Some(Err(ApiError::Status(502))),
        search: Some(Err(ApiError::Transport("dns failure".into()))),
    };

    flows::refresh_documents(&broken, &mut state).await;
    flows::upload_document(&broken, &mut state, pdf("april.pdf")).await;
    flows::run_batch_match(&broken, &mut state, DocumentId::new("doc-1")).await;
    flows::search_part(&broken, &mut state, "widget".into()).await;

    // Nothing was lost and nothing is stuck.
    assert_eq!(state.documents().len(), 1);
    assert!(state.batch().is_none());
    assert!(state.search_result().is_none());
    assert_eq!(state.busy(), &Busy::Idle);
    assert_eq!(state.tab(), Tab::Documents);
    assert_eq!(state.toast().unwrap().severity, Severity::Error);

    // A later call against a healthy backend succeeds as usual.
    let recovered = ScriptedBackend {
        search: Some(Ok(confident_hit("widget", 0.9))),
        ..ScriptedBackend::default()
    };
    flows::search_part(&recovered, &mut state, "widget".into()).await;
    assert!(state.search_result().is_some());
}

#[tokio::test]
async fn rerunning_a_match_replaces_the_previous_results() {
    let first = ScriptedBackend {
        batch: Some(Ok(batch_for("doc-1", vec![matched_line(1, "Bolt", "B-1", 0.9)]))),
        ..ScriptedBackend::default()
    };
    let second = ScriptedBackend {
        batch: Some(Ok(batch_for(
            "doc-2",
            vec![unmatched_line(1, "Bracket"), unmatched_line(2, "Gasket")],
        ))),
        ..ScriptedBackend::default()
    };
    let mut state = AppState::new();

    flows::run_batch_match(&first, &mut state, DocumentId::new("doc-1")).await;
    assert_eq!(state.results_tab(), ResultsTab::Matched);

    flows::run_batch_match(&second, &mut state, DocumentId::new("doc-2")).await;
    let batch = state.batch().expect("second batch stored");
    assert_eq!(batch.document_id, DocumentId::new("doc-2"));
    assert_eq!(state.results_tab(), ResultsTab::Unmatched);
    assert!(!state.can_select_results_tab(ResultsTab::Matched));
}

#[tokio::test]
async fn low_scoring_search_is_stored_but_not_confident() {
    let backend = ScriptedBackend {
        search: Some(Ok(confident_hit("mystery part", 0.55))),
        ..ScriptedBackend::default()
    };
    let mut state = AppState::new();

    flows::search_part(&backend, &mut state, "mystery part".into()).await;

    // The backend said "Yes" but the client renders the no-match state.
    let hit = state.search_result().expect("result stored");
    assert_eq!(hit.matched, "Yes");
    assert!(!hit.is_confident_match());
}
