//! Bridges the core flows onto Dioxus state.

use dioxus::prelude::*;
use partmatch_core::flows::StateHandle;
use partmatch_core::state::AppState;

/// [`StateHandle`] over the app's shared state signal.
///
/// Flows hold this across await points; each transition takes the write
/// guard only for the duration of its closure, so no borrow is ever
/// alive while a request is in flight.
#[derive(Clone, Copy)]
pub struct SignalState(pub Signal<AppState>);

impl StateHandle for SignalState {
    fn with<R>(&mut self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let mut state = self.0.write();
        f(&mut state)
    }
}

// Note: tests for SignalState are omitted because they require a Dioxus
// runtime. The impl is a thin wrapper around Signal::write(), which is
// already tested by Dioxus; the flows it feeds are tested in
// partmatch-core against plain AppState.
