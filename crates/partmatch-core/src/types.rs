//! Wire types for the part-matching backend.
//!
//! Shapes mirror what the backend actually sends: documents carry a
//! Mongo-style `_id`, and the single-search payload uses
//! `Capitalized_Snake` keys. Serde renames keep the Rust side idiomatic.

use serde::{Deserialize, Serialize};

/// Minimum similarity score required to present a single-search result
/// as a found match. This is client-side policy layered on top of
/// whatever threshold the backend applied internally.
pub const CONFIDENCE_THRESHOLD: f64 = 0.6;

/// Backend-assigned document identifier.
///
/// Opaque to the client; it only flows back into the batch-match URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(String);

impl DocumentId {
    /// Wraps a raw id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An uploaded invoice or purchase order, as the backend lists it.
///
/// The set of documents is replaced wholesale on every fetch; individual
/// entries are never mutated client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Backend-assigned identifier (`_id` on the wire)
    #[serde(rename = "_id")]
    pub id: DocumentId,
    /// Original filename of the uploaded PDF
    pub filename: String,
    /// Upload timestamp exactly as the backend sent it; parsed only for
    /// display, never interpreted
    pub upload_date: String,
    /// Backend-defined processing status, e.g. "pending" or "processed"
    pub status: String,
}

/// One line item extracted from a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub line_number: u32,
    pub description: String,
}

/// The catalog part a line item was matched against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCandidate {
    pub part_number: String,
    pub description: String,
}

/// Match outcome for a single line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub line_item: LineItem,
    pub matched: bool,
    /// Similarity in [0, 1]; meaningful only when `matched` is true
    #[serde(default)]
    pub score: f64,
    /// Absent when the backend found no candidate
    #[serde(default)]
    pub best_match: Option<MatchCandidate>,
}

/// Full batch-match outcome for one document.
///
/// The backend promises `matched_items == count(matched)` and
/// `match_rate == matched_items / total_items` for non-empty documents.
/// The client renders the aggregate fields verbatim and never repairs a
/// response that breaks that promise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchMatchResponse {
    pub document_id: DocumentId,
    pub total_items: u32,
    pub matched_items: u32,
    /// Fraction of line items matched, in [0, 1]
    pub match_rate: f64,
    /// One entry per line item, in document order
    pub matches: Vec<MatchResult>,
}

impl BatchMatchResponse {
    /// Line items the backend flagged as matched.
    ///
    /// Counted from `matches`, not read from `matched_items`: the
    /// sub-tab labels reflect what the tables will actually show.
    pub fn matched_count(&self) -> usize {
        self.matches.iter().filter(|m| m.matched).count()
    }

    /// Line items without a match.
    pub fn unmatched_count(&self) -> usize {
        self.matches.iter().filter(|m| !m.matched).count()
    }

    pub fn has_matched(&self) -> bool {
        self.matches.iter().any(|m| m.matched)
    }

    pub fn has_unmatched(&self) -> bool {
        self.matches.iter().any(|m| !m.matched)
    }
}

/// Outcome of a free-text single-part search.
///
/// Everything past the similarity score is present only when the backend
/// found a candidate worth reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleSearchResponse {
    /// Echo of the searched description
    #[serde(rename = "Invoice_Description", default)]
    pub invoice_description: Option<String>,
    /// Backend verdict, "Yes" or "No"
    #[serde(rename = "Matched")]
    pub matched: String,
    /// Similarity in [0, 1]
    #[serde(rename = "Similarity_Score", default)]
    pub similarity_score: f64,
    #[serde(rename = "Part_description", default)]
    pub part_description: Option<String>,
    #[serde(rename = "Document_Type", default)]
    pub document_type: Option<String>,
    #[serde(rename = "Document_ID", default)]
    pub document_id: Option<String>,
    #[serde(rename = "Part_ID", default)]
    pub part_id: Option<String>,
    #[serde(rename = "Unit_of_measure", default)]
    pub unit_of_measure: Option<String>,
}

impl SingleSearchResponse {
    /// Whether this result should be presented as a found match.
    ///
    /// Requires both the backend's "Yes" verdict and a similarity score
    /// at or above [`CONFIDENCE_THRESHOLD`]; a "Yes" with a lower score
    /// still renders as no match.
    pub fn is_confident_match(&self) -> bool {
        self.matched == "Yes" && self.similarity_score >= CONFIDENCE_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_decodes_wire_id() {
        let json = r#"{
            "_id": "663a1f2e9c8b4d0012a4e7f1",
            "filename": "invoice-0042.pdf",
            "upload_date": "2025-05-07T14:32:11.512000",
            "status": "processed"
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.id, DocumentId::new("663a1f2e9c8b4d0012a4e7f1"));
        assert_eq!(doc.filename, "invoice-0042.pdf");
        assert_eq!(doc.status, "processed");
    }

    #[test]
    fn batch_response_decodes_and_counts() {
        let json = r#"{
            "document_id": "663a1f2e9c8b4d0012a4e7f1",
            "total_items": 3,
            "matched_items": 2,
            "match_rate": 0.6666666,
            "matches": [
                {
                    "line_item": {"line_number": 1, "description": "Hex bolt M8x40"},
                    "matched": true,
                    "score": 0.91,
                    "best_match": {"part_number": "HB-8040", "description": "Bolt, hex head, M8 x 40mm"}
                },
                {
                    "line_item": {"line_number": 2, "description": "Washer 8mm"},
                    "matched": true,
                    "score": 0.77,
                    "best_match": {"part_number": "WA-080", "description": "Flat washer, 8mm"}
                },
                {
                    "line_item": {"line_number": 3, "description": "Mystery bracket"},
                    "matched": false
                }
            ]
        }"#;
        let batch: BatchMatchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(batch.matched_count(), 2);
        assert_eq!(batch.unmatched_count(), 1);
        assert!(batch.has_matched());
        assert!(batch.has_unmatched());
        assert_eq!(batch.matches[2].score, 0.0);
        assert!(batch.matches[2].best_match.is_none());
    }

    #[test]
    fn inconsistent_aggregates_are_kept_verbatim() {
        // The backend promise can break; the client must render the
        // supplied numbers as-is rather than recomputing them.
        let json = r#"{
            "document_id": "doc-1",
            "total_items": 2,
            "matched_items": 5,
            "match_rate": 2.5,
            "matches": [
                {"line_item": {"line_number": 1, "description": "a"}, "matched": false},
                {"line_item": {"line_number": 2, "description": "b"}, "matched": false}
            ]
        }"#;
        let batch: BatchMatchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(batch.matched_items, 5);
        assert_eq!(batch.matched_count(), 0);
    }

    #[test]
    fn search_response_decodes_full_payload() {
        let json = r#"{
            "Invoice_Description": "stainless steel widget",
            "Matched": "Yes",
            "Similarity_Score": 0.82,
            "Part_description": "Widget A",
            "Document_Type": "Invoice",
            "Document_ID": "D-100",
            "Part_ID": "P-200",
            "Unit_of_measure": "EA"
        }"#;
        let result: SingleSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(result.part_description.as_deref(), Some("Widget A"));
        assert_eq!(result.unit_of_measure.as_deref(), Some("EA"));
        assert!(result.is_confident_match());
    }

    #[test]
    fn search_response_decodes_sparse_payload() {
        let json = r#"{"Invoice_Description": "unknown thing", "Matched": "No", "Similarity_Score": 0.21}"#;
        let result: SingleSearchResponse = serde_json::from_str(json).unwrap();
        assert!(result.part_description.is_none());
        assert!(!result.is_confident_match());
    }

    #[test]
    fn backend_yes_below_threshold_is_not_confident() {
        let result = SingleSearchResponse {
            invoice_description: Some("widget".into()),
            matched: "Yes".into(),
            similarity_score: 0.55,
            part_description: Some("Widget A".into()),
            document_type: None,
            document_id: None,
            part_id: None,
            unit_of_measure: None,
        };
        assert!(!result.is_confident_match());
    }

    #[test]
    fn threshold_is_inclusive() {
        let result = SingleSearchResponse {
            invoice_description: None,
            matched: "Yes".into(),
            similarity_score: CONFIDENCE_THRESHOLD,
            part_description: None,
            document_type: None,
            document_id: None,
            part_id: None,
            unit_of_measure: None,
        };
        assert!(result.is_confident_match());
    }

    #[test]
    fn backend_no_with_high_score_is_not_confident() {
        let result = SingleSearchResponse {
            invoice_description: None,
            matched: "No".into(),
            similarity_score: 0.95,
            part_description: None,
            document_type: None,
            document_id: None,
            part_id: None,
            unit_of_measure: None,
        };
        assert!(!result.is_confident_match());
    }
}
