use dioxus::prelude::*;

use crate::components::use_app_state;
use crate::utils::timing::sleep_ms;
use partmatch_core::state::{Severity, TOAST_DURATION_MS};

/// Transient toast region in the corner of the viewport.
///
/// Arms one auto-dismiss timer per toast sequence number; when a toast
/// is replaced before its timer fires, the stale timer expires against
/// the old number and leaves the new toast alone.
#[component]
pub fn Snackbar() -> Element {
    let mut state = use_app_state();
    let mut armed_seq = use_signal(|| 0u64);

    use_effect(move || {
        let seq = state.read().toast().map(|t| t.seq());
        if let Some(seq) = seq {
            if *armed_seq.peek() != seq {
                armed_seq.set(seq);
                spawn(async move {
                    sleep_ms(TOAST_DURATION_MS).await;
                    state.write().expire_toast(seq);
                });
            }
        }
    });

    let current = state.read();
    let Some(toast) = current.toast() else {
        return rsx! {};
    };

    let severity_class = match toast.severity {
        Severity::Info => "pm-toast--info",
        Severity::Success => "pm-toast--success",
        Severity::Warning => "pm-toast--warning",
        Severity::Error => "pm-toast--error",
    };

    rsx! {
        div { class: "pm-toast-region",
            div { class: "pm-toast {severity_class}",
                span { class: "pm-toast-message", "{toast.message}" }
                button {
                    class: "pm-toast-close",
                    "aria-label": "Dismiss notification",
                    onclick: move |_| state.write().dismiss_toast(),
                    "✕"
                }
            }
        }
    }
}
