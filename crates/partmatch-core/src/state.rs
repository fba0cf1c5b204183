//! UI state container for the client.
//!
//! Every observable UI decision lives here as a pure transition on
//! [`AppState`], so the rules can be tested without a renderer. The
//! three user-triggered flows share one busy lock: `begin_*` takes it
//! (handing back a request sequence number) or refuses, and `finish_*`
//! applies a response only while its sequence number is still the
//! latest issued for that flow. A response that lost the race is
//! dropped on the floor instead of overwriting newer state.

use crate::error::ApiError;
use crate::types::{BatchMatchResponse, Document, DocumentId, SingleSearchResponse};

/// How long a toast stays visible before auto-dismissal, in milliseconds.
pub const TOAST_DURATION_MS: u32 = 6_000;

/// User-facing status messages, one fixed string per flow outcome.
pub const MSG_FETCH_FAILED: &str = "Error fetching documents";
pub const MSG_UPLOAD_OK: &str = "File uploaded successfully!";
pub const MSG_UPLOAD_FAILED: &str = "Error uploading file";
pub const MSG_MATCH_OK: &str = "Matching completed!";
pub const MSG_MATCH_FAILED: &str = "Error performing batch match";
pub const MSG_SEARCH_FAILED: &str = "Error searching for part";
pub const MSG_EMPTY_QUERY: &str = "Please enter a description to search";

/// Top-level view selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Documents,
    Results,
    Search,
}

/// Which half of the batch results is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultsTab {
    #[default]
    Matched,
    Unmatched,
}

/// Toast severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// A transient user-facing status message.
///
/// At most one is visible; [`AppState::notify`] replaces any current
/// toast outright rather than queueing behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    seq: u64,
}

impl Toast {
    /// Sequence number identifying this toast to its auto-dismiss timer.
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// The single in-flight request, if any.
///
/// One lock covers all three user-triggered flows; every control that
/// would start a flow renders disabled while the lock is held. Document
/// fetches run outside the lock (they follow uploads and startup, and
/// must not freeze the controls).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Busy {
    #[default]
    Idle,
    Uploading,
    Matching(DocumentId),
    Searching,
}

/// Sequence number identifying one issued request of a flow.
///
/// Only `begin_*` can mint these, so a `finish_*` call always refers to
/// a request this state actually started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestSeq(u64);

/// The client's entire UI state.
///
/// Fields are private; views read through accessors and mutate through
/// the transition methods, which enforce the tab-enablement and
/// stale-response rules in one place.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    documents: Vec<Document>,
    batch: Option<BatchMatchResponse>,
    search: Option<SingleSearchResponse>,
    toast: Option<Toast>,
    tab: Tab,
    results_tab: ResultsTab,
    busy: Busy,
    fetch_seq: u64,
    match_seq: u64,
    search_seq: u64,
    toast_seq: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn batch(&self) -> Option<&BatchMatchResponse> {
        self.batch.as_ref()
    }

    pub fn search_result(&self) -> Option<&SingleSearchResponse> {
        self.search.as_ref()
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn results_tab(&self) -> ResultsTab {
        self.results_tab
    }

    pub fn busy(&self) -> &Busy {
        &self.busy
    }

    pub fn is_busy(&self) -> bool {
        self.busy != Busy::Idle
    }

    /// Whether the given document's row should show its in-flight
    /// indicator: true only for the row whose match is running.
    pub fn is_matching(&self, id: &DocumentId) -> bool {
        matches!(&self.busy, Busy::Matching(current) if current == id)
    }

    /// The Results tab exists only once a batch response does.
    pub fn can_open_results(&self) -> bool {
        self.batch.is_some()
    }

    /// Whether a results sub-tab has any rows to show.
    pub fn can_select_results_tab(&self, tab: ResultsTab) -> bool {
        match (&self.batch, tab) {
            (Some(batch), ResultsTab::Matched) => batch.has_matched(),
            (Some(batch), ResultsTab::Unmatched) => batch.has_unmatched(),
            (None, _) => false,
        }
    }

    // =========================================================================
    // Tab selection
    // =========================================================================

    /// User-driven tab switch. Selecting Results before any batch has
    /// run is refused, matching the disabled control.
    pub fn select_tab(&mut self, tab: Tab) {
        if tab == Tab::Results && !self.can_open_results() {
            return;
        }
        self.tab = tab;
    }

    /// User-driven sub-tab switch; a zero-member sub-tab is refused.
    pub fn select_results_tab(&mut self, tab: ResultsTab) {
        if self.can_select_results_tab(tab) {
            self.results_tab = tab;
        }
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Replaces any visible toast. Returns the sequence number the
    /// auto-dismiss timer must later present to [`Self::expire_toast`].
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.toast_seq += 1;
        self.toast = Some(Toast {
            message: message.into(),
            severity,
            seq: self.toast_seq,
        });
        self.toast_seq
    }

    /// Explicit dismissal; idempotent.
    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    /// Timer-driven dismissal. Clears only the toast the timer was armed
    /// for, so a replacement toast keeps its full display time.
    pub fn expire_toast(&mut self, seq: u64) {
        if self.toast.as_ref().is_some_and(|t| t.seq == seq) {
            self.toast = None;
        }
    }

    // =========================================================================
    // Document fetch
    // =========================================================================

    /// Starts a document fetch. Fetches never take the busy lock.
    pub fn begin_fetch(&mut self) -> RequestSeq {
        self.fetch_seq += 1;
        RequestSeq(self.fetch_seq)
    }

    /// Applies a fetch outcome: success replaces the list wholesale
    /// (including with an empty list); failure leaves the prior list
    /// untouched and raises an error toast.
    pub fn finish_fetch(&mut self, seq: RequestSeq, outcome: Result<Vec<Document>, ApiError>) {
        if seq.0 != self.fetch_seq {
            return;
        }
        match outcome {
            Ok(documents) => {
                self.documents = documents;
            }
            Err(_) => {
                self.notify(MSG_FETCH_FAILED, Severity::Error);
            }
        }
    }

    // =========================================================================
    // Upload
    // =========================================================================

    /// Takes the busy lock for an upload. Returns false when another
    /// flow already holds it; the caller must then skip the request.
    pub fn begin_upload(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.busy = Busy::Uploading;
        true
    }

    /// Releases the lock and reports the upload outcome. Uploads are
    /// serialized by the lock, so no sequence check is needed here.
    pub fn finish_upload(&mut self, outcome: Result<(), ApiError>) {
        self.busy = Busy::Idle;
        match outcome {
            Ok(()) => {
                self.notify(MSG_UPLOAD_OK, Severity::Success);
            }
            Err(_) => {
                self.notify(MSG_UPLOAD_FAILED, Severity::Error);
            }
        }
    }

    // =========================================================================
    // Batch match
    // =========================================================================

    /// Takes the busy lock for a batch match of the given document. The
    /// locked id drives the per-row indicator while the request runs.
    pub fn begin_match(&mut self, id: &DocumentId) -> Option<RequestSeq> {
        if self.is_busy() {
            return None;
        }
        self.busy = Busy::Matching(id.clone());
        self.match_seq += 1;
        Some(RequestSeq(self.match_seq))
    }

    /// Applies a batch-match outcome. Success stores the response,
    /// jumps to the Results tab and picks the Matched sub-tab when any
    /// line item matched (Unmatched otherwise). Failure keeps whatever
    /// results were already on screen and does not switch tabs.
    pub fn finish_match(
        &mut self,
        seq: RequestSeq,
        outcome: Result<BatchMatchResponse, ApiError>,
    ) {
        if seq.0 != self.match_seq {
            return;
        }
        self.busy = Busy::Idle;
        match outcome {
            Ok(batch) => {
                self.results_tab = if batch.has_matched() {
                    ResultsTab::Matched
                } else {
                    ResultsTab::Unmatched
                };
                self.batch = Some(batch);
                self.tab = Tab::Results;
                self.notify(MSG_MATCH_OK, Severity::Success);
            }
            Err(_) => {
                self.notify(MSG_MATCH_FAILED, Severity::Error);
            }
        }
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Takes the busy lock for a single-part search.
    pub fn begin_search(&mut self) -> Option<RequestSeq> {
        if self.is_busy() {
            return None;
        }
        self.busy = Busy::Searching;
        self.search_seq += 1;
        Some(RequestSeq(self.search_seq))
    }

    /// Applies a search outcome. Success replaces the prior result;
    /// failure keeps the prior result on screen.
    pub fn finish_search(
        &mut self,
        seq: RequestSeq,
        outcome: Result<SingleSearchResponse, ApiError>,
    ) {
        if seq.0 != self.search_seq {
            return;
        }
        self.busy = Busy::Idle;
        match outcome {
            Ok(result) => {
                self.search = Some(result);
            }
            Err(_) => {
                self.notify(MSG_SEARCH_FAILED, Severity::Error);
            }
        }
    }
}
