use dioxus::prelude::*;

use crate::components::use_app_state;
use partmatch_core::state::Tab;

/// Top-level tab selector.
///
/// The results tab stays disabled until a batch match has produced a
/// response; the other two are always selectable.
#[component]
pub fn TabBar() -> Element {
    let mut state = use_app_state();
    let (tab, results_enabled) = {
        let state = state.read();
        (state.tab(), state.can_open_results())
    };

    rsx! {
        nav { class: "pm-tabs",
            button {
                class: tab_class(tab == Tab::Documents),
                onclick: move |_| state.write().select_tab(Tab::Documents),
                "Documents"
            }
            button {
                class: tab_class(tab == Tab::Results),
                disabled: !results_enabled,
                onclick: move |_| state.write().select_tab(Tab::Results),
                "Batch Match Results"
            }
            button {
                class: tab_class(tab == Tab::Search),
                onclick: move |_| state.write().select_tab(Tab::Search),
                "Search Part"
            }
        }
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "pm-tab pm-tab--active"
    } else {
        "pm-tab"
    }
}
