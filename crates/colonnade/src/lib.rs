#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Colonnade
//!
//! A small library for turning a JSON table description into a tree of
//! visual column and cell elements owned by a host environment.
//!
//! Colonnade does not render anything itself. It parses a document with a
//! title, a list of column headers, and a list of key-value rows, buckets
//! each row under the first header whose name matches the row's key, and
//! binds the result to whatever implements the [`Surface`] trait — a scene
//! graph, a terminal view, a DOM, or the in-memory [`MemorySurface`] used
//! for tests and headless runs.
//!
//! ## Pipeline
//!
//! - **document** - parse JSON text into a [`TableDocument`]
//! - **plan** - derive a [`RenderPlan`] (columns of bucketed cells)
//! - **surface** - the host seam: create/destroy elements, bind text
//! - **loader** - the [`TableLoader`] lifecycle: initialize, refresh, teardown
//!
//! ## Example
//!
//! ```rust
//! use colonnade::{MemorySurface, TableDocument, RenderPlan};
//!
//! let doc = TableDocument::parse(
//!     r#"{"Title":"Demo","ColumnHeaders":["X","Y"],
//!         "Data":[{"X":"1"},{"Y":"2"},{"X":"3"}]}"#,
//! ).unwrap();
//!
//! let plan = RenderPlan::from_document(&doc);
//! assert_eq!(plan.title, "Demo");
//! assert_eq!(plan.columns[0].cells, vec!["1", "3"]);
//! ```

pub mod document;
pub mod error;
pub mod loader;
pub mod plan;
pub mod surface;

pub use document::{RowEntry, TableDocument};
pub use error::{Error, ParseError, Result};
pub use loader::TableLoader;
pub use plan::{Column, RenderPlan};
pub use surface::{ElementKind, MemorySurface, NodeId, Surface};
