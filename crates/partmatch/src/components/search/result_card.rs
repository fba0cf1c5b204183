use dioxus::prelude::*;

use crate::utils::formatting::{format_percent, format_rounded_percent};
use partmatch_core::types::SingleSearchResponse;

/// Card showing the outcome of a single-part search.
///
/// Echoes what was searched, then renders either the found match or the
/// no-match notice. "Found" is the client's call: the backend verdict
/// alone is not enough below the confidence threshold.
#[component]
pub fn SearchResultCard(result: SingleSearchResponse) -> Element {
    let searched_for = result
        .invoice_description
        .clone()
        .unwrap_or_else(|| "No description".to_string());

    rsx! {
        article { class: "pm-result-card",
            h3 { class: "pm-result-title", "Search Results" }

            div { class: "pm-result-query",
                span { class: "pm-result-label", "SEARCHED FOR" }
                p { class: "pm-result-query-text", "{searched_for}" }
            }

            if result.is_confident_match() {
                MatchDetails { result }
            } else {
                NoMatchNotice {}
            }
        }
    }
}

/// Detail block for a confident match: badge, part description, the
/// optional identifier rows, and the confidence bar.
#[component]
fn MatchDetails(result: SingleSearchResponse) -> Element {
    let badge = format_rounded_percent(result.similarity_score);
    let confidence = format_percent(result.similarity_score);
    let bar_width = result.similarity_score * 100.0;
    let part_description = result
        .part_description
        .clone()
        .unwrap_or_else(|| "No description available".to_string());
    let unit = result
        .unit_of_measure
        .clone()
        .unwrap_or_else(|| "N/A".to_string());

    rsx! {
        div { class: "pm-match",
            div { class: "pm-match-header",
                span { class: "pm-match-verdict", "MATCH FOUND" }
                span { class: "pm-match-badge", "{badge} Match" }
            }

            p { class: "pm-match-part", "{part_description}" }

            div { class: "pm-match-grid",
                if let Some(document_type) = result.document_type.as_ref() {
                    span { class: "pm-match-key", "Document Type:" }
                    span { class: "pm-match-value", "{document_type}" }
                }
                if let Some(document_id) = result.document_id.as_ref() {
                    span { class: "pm-match-key", "Document ID:" }
                    span { class: "pm-match-value", "{document_id}" }
                }
                if let Some(part_id) = result.part_id.as_ref() {
                    span { class: "pm-match-key", "Part ID:" }
                    span { class: "pm-match-value", "{part_id}" }
                }
                span { class: "pm-match-key", "Unit of Measure:" }
                span { class: "pm-match-value", "{unit}" }

                span { class: "pm-match-key", "Confidence:" }
                div { class: "pm-confidence",
                    div { class: "pm-progress-bar",
                        span { style: "width: {bar_width}%;" }
                    }
                    span { class: "pm-confidence-value", "{confidence}" }
                }
            }

            p { class: "pm-match-note",
                "This part was matched based on semantic similarity to your search query."
            }
        }
    }
}

/// Notice shown when nothing cleared the confidence threshold.
#[component]
fn NoMatchNotice() -> Element {
    rsx! {
        div { class: "pm-no-match",
            p { class: "pm-no-match-title", "No exact match found" }
            p { class: "pm-no-match-text",
                "We couldn't find a part that closely matches your search. \
                 Try using different keywords or check for typos."
            }
        }
    }
}
