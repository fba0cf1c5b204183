use dioxus::prelude::*;

use super::{SearchCard, SearchResultCard};
use crate::components::{use_app_state, use_controller, ControllerMessage};

/// Free-text part search view with the last result below the input
#[component]
pub fn SearchView() -> Element {
    let state = use_app_state();
    let controller = use_controller();
    let search_query = use_signal(String::new);

    let handle_search = move |query: String| {
        controller.send(ControllerMessage::Search(query));
    };

    let state = state.read();

    rsx! {
        section { class: "pm-card",
            h2 { class: "pm-card-title", "Search for a Part" }

            SearchCard {
                search_query,
                on_search: handle_search,
            }

            if let Some(result) = state.search_result() {
                SearchResultCard { result: result.clone() }
            }
        }
    }
}
