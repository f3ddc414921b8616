//! Render plan derivation.
//!
//! A [`RenderPlan`] is the fully resolved title plus column set, ready to
//! hand to a surface. Derivation buckets each row under the first header
//! (in header order) whose name equals the row's key. A claimed row is
//! removed from further matching, so a duplicate header name later in the
//! sequence yields an empty column. Rows matching no header are dropped.
//!
//! The input document is never mutated; claiming is tracked in a separate
//! marker vector rather than by removing rows mid-iteration.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::document::TableDocument;

/// A header plus the ordered list of data values bucketed under it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Header name displayed at the top of the column.
    pub header: String,
    /// Cell values, in original row order.
    pub cells: Vec<String>,
}

impl Column {
    /// Creates an empty column with the given header.
    #[must_use]
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            cells: Vec::new(),
        }
    }
}

/// The derived, in-memory structure ready for display.
///
/// Derived fresh on every refresh and discarded after rendering; the
/// previous plan is fully replaced, never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderPlan {
    /// Table title; empty when the document left it unset.
    pub title: String,
    /// One column per document header, in header order.
    pub columns: Vec<Column>,
}

impl RenderPlan {
    /// Derives a render plan from a parsed document.
    ///
    /// Always succeeds: bucketing has no error conditions.
    #[must_use]
    pub fn from_document(doc: &TableDocument) -> Self {
        let mut claimed = vec![false; doc.rows.len()];

        let columns: Vec<Column> = doc
            .headers
            .iter()
            .map(|header| {
                let mut column = Column::new(header.clone());
                for (i, row) in doc.rows.iter().enumerate() {
                    if !claimed[i] && row.key == *header {
                        claimed[i] = true;
                        column.cells.push(row.value.clone());
                    }
                }
                column
            })
            .collect();

        let dropped = claimed.iter().filter(|c| !**c).count();
        if dropped > 0 {
            warn!(dropped, "rows matched no column header");
        }
        debug!(
            columns = columns.len(),
            cells = doc.rows.len() - dropped,
            "render plan derived"
        );

        Self {
            title: doc.title.clone().unwrap_or_default(),
            columns,
        }
    }

    /// Total number of cells across all columns.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.columns.iter().map(|c| c.cells.len()).sum()
    }

    /// Returns whether the plan has no title and no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::RowEntry;

    fn doc(title: Option<&str>, headers: &[&str], rows: &[(&str, &str)]) -> TableDocument {
        TableDocument {
            title: title.map(String::from),
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: rows.iter().map(|(k, v)| RowEntry::new(*k, *v)).collect(),
        }
    }

    #[test]
    fn buckets_rows_under_matching_headers() {
        let doc = doc(
            Some("Demo"),
            &["X", "Y"],
            &[("X", "1"), ("Y", "2"), ("X", "3"), ("Z", "9")],
        );
        let plan = RenderPlan::from_document(&doc);

        assert_eq!(plan.title, "Demo");
        assert_eq!(plan.columns.len(), 2);
        assert_eq!(plan.columns[0].header, "X");
        assert_eq!(plan.columns[0].cells, vec!["1", "3"]);
        assert_eq!(plan.columns[1].header, "Y");
        assert_eq!(plan.columns[1].cells, vec!["2"]);
    }

    #[test]
    fn duplicate_header_gets_empty_column() {
        let doc = doc(None, &["A", "A"], &[("A", "x"), ("A", "y")]);
        let plan = RenderPlan::from_document(&doc);

        assert_eq!(plan.columns[0].cells, vec!["x", "y"]);
        assert!(plan.columns[1].cells.is_empty());
    }

    #[test]
    fn unmatched_rows_are_dropped() {
        let doc = doc(None, &["A"], &[("B", "1"), ("C", "2")]);
        let plan = RenderPlan::from_document(&doc);

        assert_eq!(plan.columns.len(), 1);
        assert!(plan.columns[0].cells.is_empty());
        assert_eq!(plan.cell_count(), 0);
    }

    #[test]
    fn preserves_row_order_within_column() {
        let doc = doc(
            None,
            &["K"],
            &[("K", "first"), ("K", "second"), ("K", "third")],
        );
        let plan = RenderPlan::from_document(&doc);
        assert_eq!(plan.columns[0].cells, vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_document_yields_empty_plan() {
        let plan = RenderPlan::from_document(&TableDocument::default());
        assert!(plan.is_empty());
        assert_eq!(plan.cell_count(), 0);
    }

    #[test]
    fn unset_title_renders_empty() {
        let doc = doc(None, &["A"], &[]);
        let plan = RenderPlan::from_document(&doc);
        assert_eq!(plan.title, "");
        assert!(!plan.is_empty());
    }

    #[test]
    fn derivation_does_not_mutate_document() {
        let original = doc(Some("T"), &["A"], &[("A", "1"), ("B", "2")]);
        let snapshot = original.clone();
        let _ = RenderPlan::from_document(&original);
        assert_eq!(original, snapshot);
    }

    #[test]
    fn derivation_is_idempotent() {
        let doc = doc(Some("T"), &["A", "B"], &[("B", "1"), ("A", "2")]);
        assert_eq!(
            RenderPlan::from_document(&doc),
            RenderPlan::from_document(&doc)
        );
    }
}
