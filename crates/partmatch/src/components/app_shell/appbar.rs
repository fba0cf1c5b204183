use dioxus::prelude::*;

use crate::components::use_app_state;
use partmatch_core::state::Busy;

/// Global app bar with logo and a pill reflecting the in-flight request
#[component]
pub fn AppBar() -> Element {
    let state = use_app_state();

    let busy_pill = {
        let busy = state.read().busy().clone();
        match busy {
            Busy::Idle => rsx! {
                span { class: "pm-status-pill pm-status-pill--ok",
                    span { class: "pm-status-dot pm-status-dot--ok" }
                    "Ready"
                }
            },
            Busy::Uploading => rsx! {
                span { class: "pm-status-pill pm-status-pill--warn",
                    span { class: "pm-status-dot pm-status-dot--warn" }
                    "Uploading…"
                }
            },
            Busy::Matching(_) => rsx! {
                span { class: "pm-status-pill pm-status-pill--warn",
                    span { class: "pm-status-dot pm-status-dot--warn" }
                    "Matching…"
                }
            },
            Busy::Searching => rsx! {
                span { class: "pm-status-pill pm-status-pill--warn",
                    span { class: "pm-status-dot pm-status-dot--warn" }
                    "Searching…"
                }
            },
        }
    };

    rsx! {
        header { class: "pm-appbar",
            div { class: "pm-appbar-left",
                div { class: "pm-logo",
                    span { class: "pm-logo-word", "Part" }
                    span { class: "pm-logo-word pm-logo-word--accent", "Match" }
                }
                span { class: "pm-appbar-tagline", "Invoice Parts Matcher" }
            }
            div { class: "pm-appbar-right",
                {busy_pill}
            }
        }
    }
}
