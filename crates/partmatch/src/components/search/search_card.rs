use dioxus::prelude::*;

use crate::components::use_app_state;
use partmatch_core::state::Busy;

/// Search input row with a submit button.
///
/// Enter submits like the button does; both refuse a query that trims
/// to empty, and both lock while a flow is in flight.
#[component]
pub fn SearchCard(mut search_query: Signal<String>, on_search: EventHandler<String>) -> Element {
    let state = use_app_state();

    let (busy, searching) = {
        let state = state.read();
        (state.is_busy(), state.busy() == &Busy::Searching)
    };

    let handle_keypress = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter {
            let query = search_query.read().clone();
            if !query.trim().is_empty() {
                on_search.call(query);
            }
        }
    };

    rsx! {
        div { class: "pm-search-row",
            input {
                class: "pm-search-input",
                r#type: "text",
                placeholder: "Enter part description...",
                value: "{search_query}",
                disabled: busy,
                oninput: move |evt| search_query.set(evt.value()),
                onkeypress: handle_keypress,
            }
            button {
                class: "pm-btn pm-btn--primary",
                disabled: busy || search_query.read().trim().is_empty(),
                onclick: move |_| {
                    let query = search_query.read().clone();
                    if !query.trim().is_empty() {
                        on_search.call(query);
                    }
                },
                if searching {
                    "Searching…"
                } else {
                    "Search"
                }
            }
        }
    }
}
