//! Error types for loading and parsing table documents.
//!
//! All failures surface to the caller of [`TableLoader::refresh`]; the
//! loader neither retries nor keeps a last-good render. A failed refresh
//! leaves the surface cleared rather than stale or partially built.
//!
//! [`TableLoader::refresh`]: crate::TableLoader::refresh

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for loader operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while refreshing a table.
#[derive(Debug, Error)]
pub enum Error {
    /// The source file does not exist.
    #[error("table source not found: {path}")]
    SourceNotFound {
        /// Path that was probed.
        path: PathBuf,
    },

    /// The source file exists but could not be read.
    #[error("failed to read table source {path}: {source}")]
    SourceRead {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The source text is not a valid table document.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The loader was torn down; a stale trigger must not resurrect it.
    #[error("table loader has been torn down")]
    TornDown,
}

/// Errors that can occur while parsing table document text.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The text is not well-formed JSON.
    #[error("document is not well-formed json: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The document root is not a JSON object.
    #[error("document root is not a json object")]
    NotAnObject,

    /// A recognized section is present but has the wrong shape.
    #[error("section {key:?} is not an array")]
    SectionNotArray {
        /// Name of the offending section.
        key: &'static str,
    },

    /// A `Data` element is not an object.
    #[error("data element {index} is not an object")]
    RowNotAnObject {
        /// Zero-based index of the offending element.
        index: usize,
    },
}
