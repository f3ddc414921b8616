//! Table document parsing.
//!
//! A table document is a JSON object with up to three recognized top-level
//! sections:
//!
//! - `Title` - the table title
//! - `ColumnHeaders` - ordered column header names (duplicates allowed)
//! - `Data` - an array of objects, each property contributing one
//!   `(key, value)` row
//!
//! Unrecognized sections are ignored. Missing sections fall back to an
//! unset title and empty sequences. Section order and row order are
//! significant end to end, which is why parsing goes through `serde_json`
//! with `preserve_order` rather than a derived struct.
//!
//! # Example
//!
//! ```rust
//! use colonnade::TableDocument;
//!
//! let doc = TableDocument::parse(
//!     r#"{"Title":"Inventory","ColumnHeaders":["Item"],"Data":[{"Item":"apple"}]}"#,
//! ).unwrap();
//!
//! assert_eq!(doc.title.as_deref(), Some("Inventory"));
//! assert_eq!(doc.headers, vec!["Item"]);
//! assert_eq!(doc.rows[0].key, "Item");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::ParseError;

/// Json key identifying the title of the table.
const KEY_TITLE: &str = "Title";

/// Json key identifying the column headers of the table.
const KEY_HEADERS: &str = "ColumnHeaders";

/// Json key identifying the row data of the table.
const KEY_DATA: &str = "Data";

/// A single `(key, value)` data row.
///
/// The key is the bucketing name matched against column headers; the value
/// is the cell content, already stringified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowEntry {
    /// Bucketing key, matched against header names.
    pub key: String,
    /// Cell content.
    pub value: String,
}

impl RowEntry {
    /// Creates a row entry from a key and a value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// The parsed external input: title, headers, and flat key-value rows.
///
/// A document is rebuilt from scratch on every refresh; there is no
/// incremental update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDocument {
    /// Table title; `None` when the `Title` section is absent.
    pub title: Option<String>,
    /// Ordered column header names (duplicates allowed).
    pub headers: Vec<String>,
    /// Ordered data rows (duplicate keys allowed).
    pub rows: Vec<RowEntry>,
}

impl TableDocument {
    /// Parses JSON text into a table document.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when the text is not well-formed JSON, the
    /// root is not an object, `ColumnHeaders` or `Data` is present but not
    /// an array, or a `Data` element is not an object.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let root: Value = serde_json::from_str(text)?;
        let Value::Object(sections) = root else {
            return Err(ParseError::NotAnObject);
        };

        let mut doc = Self::default();
        for (section, value) in sections {
            match section.as_str() {
                KEY_TITLE => doc.title = Some(stringify(&value)),
                KEY_HEADERS => {
                    let Value::Array(items) = value else {
                        return Err(ParseError::SectionNotArray { key: KEY_HEADERS });
                    };
                    doc.headers = items.iter().map(stringify).collect();
                }
                KEY_DATA => {
                    let Value::Array(items) = value else {
                        return Err(ParseError::SectionNotArray { key: KEY_DATA });
                    };
                    for (index, item) in items.iter().enumerate() {
                        let Value::Object(properties) = item else {
                            return Err(ParseError::RowNotAnObject { index });
                        };
                        // Elements are expected to carry a single property,
                        // but every property present becomes a row.
                        for (key, value) in properties {
                            doc.rows.push(RowEntry::new(key, stringify(value)));
                        }
                    }
                }
                _ => {}
            }
        }

        if doc.title.is_none() {
            debug!(section = KEY_TITLE, "document section absent");
        }
        if doc.headers.is_empty() {
            debug!(section = KEY_HEADERS, "document section absent or empty");
        }
        if doc.rows.is_empty() {
            debug!(section = KEY_DATA, "document section absent or empty");
        }

        Ok(doc)
    }
}

/// Renders a JSON value as cell text.
///
/// Strings are taken verbatim, `null` becomes the empty string, and every
/// other value keeps its JSON text (nested containers stay compact JSON).
fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
