//! Table loader lifecycle: initialize, refresh, teardown.
//!
//! [`TableLoader`] owns the source path, the bound [`Surface`], and the
//! most recently derived [`RenderPlan`]. Every refresh rebuilds the table
//! from scratch: clear the surface, read the source, parse, derive, bind.
//! There is no incremental update and no last-good cache; a failed refresh
//! leaves the surface cleared (empty title, no columns) and propagates the
//! error to the caller.
//!
//! The loader is single-threaded and synchronous. Refresh runs to
//! completion before control returns; serializing re-entrant triggers is
//! the host's responsibility, which `&mut self` enforces within a thread.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::document::TableDocument;
use crate::error::{Error, Result};
use crate::plan::RenderPlan;
use crate::surface::{ElementKind, Surface};

/// Drives the JSON-to-table pipeline against a host surface.
///
/// # Example
///
/// ```rust,no_run
/// use colonnade::{MemorySurface, TableLoader};
///
/// let mut loader = TableLoader::new("table.json", MemorySurface::new());
/// loader.initialize()?;
/// // later, on a user-triggered refresh request:
/// loader.refresh()?;
/// // on shutdown:
/// loader.teardown();
/// # Ok::<(), colonnade::Error>(())
/// ```
#[derive(Debug)]
pub struct TableLoader<S: Surface> {
    /// Path of the source document, owned by the host environment.
    source: PathBuf,
    /// The host visual tree.
    surface: S,
    /// Most recently derived plan; replaced wholesale on every refresh.
    plan: Option<RenderPlan>,
    /// Set by `teardown`; refreshes are rejected afterwards.
    torn_down: bool,
}

impl<S: Surface> TableLoader<S> {
    /// Creates a loader bound to a source path and a surface.
    ///
    /// Nothing is read or rendered until [`initialize`](Self::initialize)
    /// or [`refresh`](Self::refresh) runs.
    #[must_use]
    pub fn new(source: impl Into<PathBuf>, surface: S) -> Self {
        Self {
            source: source.into(),
            surface,
            plan: None,
            torn_down: false,
        }
    }

    /// Runs the pipeline once on startup.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`refresh`](Self::refresh).
    pub fn initialize(&mut self) -> Result<()> {
        debug!(source = %self.source.display(), "initializing table loader");
        self.refresh()
    }

    /// Re-runs the pipeline: clear, read, parse, derive, bind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceNotFound`] or [`Error::SourceRead`] when the
    /// source cannot be read, [`Error::Parse`] when it is not a valid table
    /// document, and [`Error::TornDown`] after [`teardown`](Self::teardown).
    /// On failure the surface stays cleared and the stored plan is dropped.
    pub fn refresh(&mut self) -> Result<()> {
        if self.torn_down {
            return Err(Error::TornDown);
        }

        self.clear();

        let text = self.read_source().inspect_err(|err| {
            warn!(source = %self.source.display(), %err, "refresh failed, table cleared");
        })?;
        let doc = TableDocument::parse(&text).map_err(|err| {
            warn!(source = %self.source.display(), %err, "refresh failed, table cleared");
            Error::from(err)
        })?;

        let plan = RenderPlan::from_document(&doc);
        self.bind(&plan);
        info!(
            columns = plan.columns.len(),
            cells = plan.cell_count(),
            "table refreshed"
        );
        self.plan = Some(plan);
        Ok(())
    }

    /// Detaches the loader from its refresh trigger.
    ///
    /// Subsequent refreshes fail with [`Error::TornDown`]; a stale trigger
    /// firing after shutdown must not rebuild the table. The surface is
    /// left as-is — the host owns its destruction.
    pub fn teardown(&mut self) {
        if !self.torn_down {
            debug!("table loader torn down");
        }
        self.torn_down = true;
    }

    /// The most recent successfully derived plan.
    #[must_use]
    pub fn plan(&self) -> Option<&RenderPlan> {
        self.plan.as_ref()
    }

    /// The source path this loader reads from.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Shared access to the bound surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consumes the loader and returns the surface.
    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Destroys all prior render output and resets the title.
    fn clear(&mut self) {
        for handle in self.surface.children(None) {
            self.surface.destroy_element(&handle);
        }
        self.surface.set_title("");
        self.plan = None;
    }

    fn read_source(&self) -> Result<String> {
        std::fs::read_to_string(&self.source).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                Error::SourceNotFound {
                    path: self.source.clone(),
                }
            } else {
                Error::SourceRead {
                    path: self.source.clone(),
                    source: err,
                }
            }
        })
    }

    /// Instantiates one column element per plan column, cells beneath.
    fn bind(&mut self, plan: &RenderPlan) {
        self.surface.set_title(&plan.title);
        for column in &plan.columns {
            let column_handle = self.surface.create_element(ElementKind::Column, None);
            self.surface.set_text(&column_handle, &column.header);
            for cell in &column.cells {
                let cell_handle = self
                    .surface
                    .create_element(ElementKind::Cell, Some(&column_handle));
                self.surface.set_text(&cell_handle, cell);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::surface::MemorySurface;

    fn source_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn initialize_binds_document_to_surface() {
        let file = source_file(
            r#"{"Title":"Demo","ColumnHeaders":["X","Y"],
                "Data":[{"X":"1"},{"Y":"2"},{"X":"3"},{"Z":"9"}]}"#,
        );
        let mut loader = TableLoader::new(file.path(), MemorySurface::new());
        loader.initialize().unwrap();

        assert_eq!(loader.surface().title(), "Demo");
        assert_eq!(
            loader.surface().columns(),
            vec![
                ("X".to_string(), vec!["1".to_string(), "3".to_string()]),
                ("Y".to_string(), vec!["2".to_string()]),
            ]
        );
        assert_eq!(loader.plan().unwrap().cell_count(), 3);
    }

    #[test]
    fn refresh_replaces_prior_render() {
        let file = source_file(r#"{"Title":"One","ColumnHeaders":["A"],"Data":[{"A":"1"}]}"#);
        let mut loader = TableLoader::new(file.path(), MemorySurface::new());
        loader.initialize().unwrap();

        std::fs::write(
            file.path(),
            r#"{"Title":"Two","ColumnHeaders":["B"],"Data":[{"B":"2"}]}"#,
        )
        .unwrap();
        loader.refresh().unwrap();

        assert_eq!(loader.surface().title(), "Two");
        assert_eq!(
            loader.surface().columns(),
            vec![("B".to_string(), vec!["2".to_string()])]
        );
        // Exactly one column and one cell are live after the rebind.
        assert_eq!(loader.surface().live_node_count(), 2);
    }

    #[test]
    fn missing_source_clears_table() {
        let file = source_file(r#"{"Title":"T","ColumnHeaders":["A"],"Data":[{"A":"1"}]}"#);
        let mut loader = TableLoader::new(file.path(), MemorySurface::new());
        loader.initialize().unwrap();

        drop(file);
        let err = loader.refresh().unwrap_err();

        assert!(matches!(err, Error::SourceNotFound { .. }));
        assert_eq!(loader.surface().title(), "");
        assert!(loader.surface().columns().is_empty());
        assert!(loader.plan().is_none());
    }

    #[test]
    fn malformed_source_clears_table() {
        let file = source_file(r#"{"Title":"T","ColumnHeaders":["A"],"Data":[{"A":"1"}]}"#);
        let mut loader = TableLoader::new(file.path(), MemorySurface::new());
        loader.initialize().unwrap();

        std::fs::write(file.path(), "not json").unwrap();
        let err = loader.refresh().unwrap_err();

        assert!(matches!(err, Error::Parse(_)));
        assert_eq!(loader.surface().title(), "");
        assert!(loader.surface().columns().is_empty());
        assert!(loader.plan().is_none());
    }

    #[test]
    fn recovers_on_next_successful_refresh() {
        let file = source_file("not json");
        let mut loader = TableLoader::new(file.path(), MemorySurface::new());
        assert!(loader.initialize().is_err());

        std::fs::write(file.path(), r#"{"Title":"Back","ColumnHeaders":[],"Data":[]}"#).unwrap();
        loader.refresh().unwrap();

        assert_eq!(loader.surface().title(), "Back");
        assert!(loader.plan().is_some());
    }

    #[test]
    fn teardown_rejects_refresh() {
        let file = source_file(r#"{"Title":"T"}"#);
        let mut loader = TableLoader::new(file.path(), MemorySurface::new());
        loader.initialize().unwrap();

        loader.teardown();
        assert!(matches!(loader.refresh(), Err(Error::TornDown)));

        // Teardown leaves the last render in place; the host owns the tree.
        assert_eq!(loader.surface().title(), "T");
    }

    #[test]
    fn teardown_is_idempotent() {
        let mut loader = TableLoader::new("unused.json", MemorySurface::new());
        loader.teardown();
        loader.teardown();
        assert!(matches!(loader.refresh(), Err(Error::TornDown)));
    }

    #[test]
    fn plan_is_none_before_first_refresh() {
        let loader = TableLoader::new("unused.json", MemorySurface::new());
        assert!(loader.plan().is_none());
        assert_eq!(loader.source(), Path::new("unused.json"));
    }

    #[test]
    fn into_surface_returns_bound_tree() {
        let file = source_file(r#"{"Title":"T","ColumnHeaders":["A"],"Data":[{"A":"1"}]}"#);
        let mut loader = TableLoader::new(file.path(), MemorySurface::new());
        loader.initialize().unwrap();

        let surface = loader.into_surface();
        assert_eq!(surface.title(), "T");
    }
}
