//! UI components for the PartMatch application.
//!
//! # Architecture
//!
//! - `app_shell`: AppBar, TabBar, Footer
//! - `documents`: UploadCard, DocumentTable
//! - `results`: ResultsView
//! - `search`: SearchView, SearchCard, SearchResultCard
//! - `snackbar`: transient status toasts
//!
//! # Context Providers
//!
//! Components use Dioxus context for shared state:
//!
//! ```ignore
//! // Read the client state from any component
//! let state = use_app_state();
//! let busy = state.read().is_busy();
//!
//! // Send work to the controller coroutine
//! let controller = use_controller();
//! controller.send(ControllerMessage::RefreshDocuments);
//! ```

mod app_shell;
mod documents;
mod results;
mod search;
mod snackbar;

pub use app_shell::{AppBar, Footer, TabBar};
pub use documents::{DocumentTable, UploadCard};
pub use results::ResultsView;
pub use search::SearchView;
pub use snackbar::Snackbar;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;

use crate::signal_state::SignalState;
use partmatch_core::api::{HttpApi, UploadFile};
use partmatch_core::flows;
use partmatch_core::state::{AppState, Tab};
use partmatch_core::types::DocumentId;

/// Requests handled by the controller coroutine.
///
/// One message per user action; the coroutine runs them in arrival
/// order, so at most one backend call is ever in flight.
pub enum ControllerMessage {
    RefreshDocuments,
    Upload(UploadFile),
    BatchMatch(DocumentId),
    Search(String),
}

/// Shared client state signal.
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

/// Sender for the controller coroutine.
pub fn use_controller() -> Coroutine<ControllerMessage> {
    use_context::<Coroutine<ControllerMessage>>()
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::new);
    use_context_provider(|| state);

    // Controller coroutine: owns the HTTP client and drives one flow at
    // a time. The initial document fetch runs before the first message.
    let controller = use_coroutine(move |mut rx: UnboundedReceiver<ControllerMessage>| async move {
        let api = HttpApi::from_config();
        let mut handle = SignalState(state);

        flows::refresh_documents(&api, &mut handle).await;

        while let Some(msg) = rx.next().await {
            match msg {
                ControllerMessage::RefreshDocuments => {
                    flows::refresh_documents(&api, &mut handle).await;
                }
                ControllerMessage::Upload(file) => {
                    flows::upload_document(&api, &mut handle, file).await;
                }
                ControllerMessage::BatchMatch(id) => {
                    flows::run_batch_match(&api, &mut handle, id).await;
                }
                ControllerMessage::Search(query) => {
                    flows::search_part(&api, &mut handle, query).await;
                }
            }
        }
    });
    use_context_provider(|| controller);

    let tab = state.read().tab();

    rsx! {
        div { class: "pm-app",
            AppBar {}

            main { class: "pm-main",
                UploadCard {}
                TabBar {}

                if tab == Tab::Documents {
                    DocumentTable {}
                }
                if tab == Tab::Results {
                    ResultsView {}
                }
                if tab == Tab::Search {
                    SearchView {}
                }
            }

            Footer {}
            Snackbar {}
        }
    }
}
