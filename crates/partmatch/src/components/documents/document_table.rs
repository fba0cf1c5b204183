use dioxus::prelude::*;

use crate::components::{use_app_state, use_controller, ControllerMessage};
use crate::utils::formatting::format_upload_date;
use partmatch_core::types::Document;

/// Table of uploaded documents with a per-row match action
#[component]
pub fn DocumentTable() -> Element {
    let state = use_app_state();
    let state = state.read();

    rsx! {
        section { class: "pm-card",
            h2 { class: "pm-card-title", "Uploaded Documents" }
            table { class: "pm-table",
                thead {
                    tr {
                        th { "Filename" }
                        th { "Upload Date" }
                        th { "Status" }
                        th { class: "pm-right", "Actions" }
                    }
                }
                tbody {
                    for doc in state.documents().iter() {
                        DocumentRow { key: "{doc.id}", document: doc.clone() }
                    }
                    if state.documents().is_empty() {
                        tr {
                            td { colspan: 4, class: "pm-table-empty",
                                "No documents uploaded yet"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One document row. The action button is disabled while any flow runs;
/// only the row whose match is in flight shows the spinner.
#[component]
fn DocumentRow(document: Document) -> Element {
    let state = use_app_state();
    let controller = use_controller();

    let (busy, row_busy) = {
        let state = state.read();
        (state.is_busy(), state.is_matching(&document.id))
    };

    let uploaded = format_upload_date(&document.upload_date);
    let id = document.id.clone();

    rsx! {
        tr {
            td { "{document.filename}" }
            td { "{uploaded}" }
            td {
                span { class: "pm-status", "{document.status}" }
            }
            td { class: "pm-right",
                button {
                    class: "pm-btn pm-btn--outline",
                    disabled: busy,
                    onclick: move |_| {
                        controller.send(ControllerMessage::BatchMatch(id.clone()));
                    },
                    if row_busy {
                        span { class: "pm-spinner" }
                        "Matching…"
                    } else {
                        "Match Parts"
                    }
                }
            }
        }
    }
}
