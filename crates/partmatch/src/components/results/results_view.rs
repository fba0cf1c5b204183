use dioxus::prelude::*;

use crate::components::use_app_state;
use crate::utils::formatting::format_percent;
use partmatch_core::state::ResultsTab;
use partmatch_core::types::MatchResult;

/// Batch match results: summary header, matched/unmatched sub-tabs, and
/// the filtered line-item table.
///
/// The header numbers come straight from the backend response, even
/// when they disagree with the per-row flags; the sub-tab labels and
/// row filter count the rows themselves.
#[component]
pub fn ResultsView() -> Element {
    let mut state = use_app_state();
    let current = state.read();
    let Some(batch) = current.batch() else {
        // The results tab cannot be selected before a batch exists.
        return rsx! {};
    };

    let results_tab = current.results_tab();
    let matched_count = batch.matched_count();
    let unmatched_count = batch.unmatched_count();
    let rate = format_percent(batch.match_rate);

    let rows: Vec<MatchResult> = batch
        .matches
        .iter()
        .filter(|m| match results_tab {
            ResultsTab::Matched => m.matched,
            ResultsTab::Unmatched => !m.matched,
        })
        .cloned()
        .collect();

    rsx! {
        section { class: "pm-card",
            h2 { class: "pm-card-title", "Batch Match Results" }
            p { class: "pm-card-subtitle", "Document: {batch.document_id}" }
            p { class: "pm-summary",
                "Matched: {batch.matched_items} / {batch.total_items} ({rate})"
            }

            div { class: "pm-subtabs",
                button {
                    class: subtab_class(results_tab == ResultsTab::Matched),
                    disabled: matched_count == 0,
                    onclick: move |_| state.write().select_results_tab(ResultsTab::Matched),
                    "Matched ({matched_count})"
                }
                button {
                    class: subtab_class(results_tab == ResultsTab::Unmatched),
                    disabled: unmatched_count == 0,
                    onclick: move |_| state.write().select_results_tab(ResultsTab::Unmatched),
                    "Unmatched ({unmatched_count})"
                }
            }

            table { class: "pm-table",
                thead {
                    tr {
                        th { "Line Item" }
                        th { "Description" }
                        th { "Matched Part" }
                        th { "Part ID" }
                        th { "Score" }
                    }
                }
                tbody {
                    for row in rows {
                        MatchRow { key: "{row.line_item.line_number}", result: row }
                    }
                }
            }
        }
    }
}

/// One line-item row with the fallback strings for missing candidates.
#[component]
fn MatchRow(result: MatchResult) -> Element {
    let part_display = if result.matched {
        result
            .best_match
            .as_ref()
            .map(|m| m.description.clone())
            .unwrap_or_else(|| "No description available".to_string())
    } else {
        "No match found".to_string()
    };
    let part_number = result
        .best_match
        .as_ref()
        .map(|m| m.part_number.clone())
        .unwrap_or_else(|| "-".to_string());
    let score = if result.matched {
        format_percent(result.score)
    } else {
        "N/A".to_string()
    };

    rsx! {
        tr {
            td { "{result.line_item.line_number}" }
            td { "{result.line_item.description}" }
            td { "{part_display}" }
            td { "{part_number}" }
            td { "{score}" }
        }
    }
}

fn subtab_class(active: bool) -> &'static str {
    if active {
        "pm-subtab pm-subtab--active"
    } else {
        "pm-subtab"
    }
}
