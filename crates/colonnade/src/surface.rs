//! The host seam: a visual tree the loader can bind a plan to.
//!
//! Colonnade never talks to a concrete scene graph, widget toolkit, or
//! terminal. It only consumes the [`Surface`] trait: instantiate a column
//! or cell element, destroy an element and its children, bind text, and
//! enumerate the current children of the column container so prior output
//! can be cleared.
//!
//! [`MemorySurface`] is the built-in implementation: an arena-backed tree
//! that records every mutation. It backs the unit and integration tests
//! and doubles as the model behind headless renderers.

use tracing::trace;

/// Kind of visual element a surface can instantiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// A column container, child of the surface root.
    Column,
    /// A single cell, child of a column.
    Cell,
}

/// A host-owned visual tree.
///
/// `parent = None` addresses the host's column container root. Handles are
/// opaque to the loader; it only stores them long enough to attach cells
/// and clear previous output.
pub trait Surface {
    /// Opaque handle to a visual element.
    type Handle: Clone + PartialEq + std::fmt::Debug;

    /// Instantiates a renderable element under the given parent.
    fn create_element(&mut self, kind: ElementKind, parent: Option<&Self::Handle>)
    -> Self::Handle;

    /// Removes a previously created element and its children.
    fn destroy_element(&mut self, handle: &Self::Handle);

    /// Binds text content to an element.
    fn set_text(&mut self, handle: &Self::Handle, text: &str);

    /// Enumerates the current children of the given parent.
    fn children(&self, parent: Option<&Self::Handle>) -> Vec<Self::Handle>;

    /// Binds the table title to the host's dedicated title widget.
    fn set_title(&mut self, text: &str);
}

/// Handle into a [`MemorySurface`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A single arena slot.
#[derive(Debug, Clone)]
struct Node {
    kind: ElementKind,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    alive: bool,
}

/// An in-memory [`Surface`] for tests and headless rendering.
///
/// Destroyed slots are retained dead rather than reused, so handles stay
/// stable for the lifetime of the surface.
///
/// # Example
///
/// ```rust
/// use colonnade::{ElementKind, MemorySurface, Surface};
///
/// let mut surface = MemorySurface::new();
/// let column = surface.create_element(ElementKind::Column, None);
/// surface.set_text(&column, "Name");
///
/// assert_eq!(surface.columns(), vec![("Name".to_string(), vec![])]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
    title: String,
}

impl MemorySurface {
    /// Creates an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently bound title text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of live elements in the tree.
    #[must_use]
    pub fn live_node_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.alive).count()
    }

    /// Total number of elements ever created, destroyed ones included.
    #[must_use]
    pub fn created_node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The element kind recorded for a handle, if the element is alive.
    #[must_use]
    pub fn kind(&self, handle: NodeId) -> Option<ElementKind> {
        self.node(handle).map(|n| n.kind)
    }

    /// The text recorded for a handle, if the element is alive.
    #[must_use]
    pub fn text(&self, handle: NodeId) -> Option<&str> {
        self.node(handle).map(|n| n.text.as_str())
    }

    /// Snapshot of the live tree as `(column text, cell texts)` pairs.
    #[must_use]
    pub fn columns(&self) -> Vec<(String, Vec<String>)> {
        self.roots
            .iter()
            .filter_map(|id| self.node(*id))
            .map(|column| {
                let cells = column
                    .children
                    .iter()
                    .filter_map(|id| self.node(*id))
                    .map(|cell| cell.text.clone())
                    .collect();
                (column.text.clone(), cells)
            })
            .collect()
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).filter(|n| n.alive)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0).filter(|n| n.alive)
    }

    /// Marks a subtree dead, children first.
    fn bury(&mut self, id: NodeId) {
        let children = match self.node(id) {
            Some(node) => node.children.clone(),
            None => return,
        };
        for child in children {
            self.bury(child);
        }
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.alive = false;
            node.children.clear();
        }
    }
}

impl Surface for MemorySurface {
    type Handle = NodeId;

    fn create_element(
        &mut self,
        kind: ElementKind,
        parent: Option<&Self::Handle>,
    ) -> Self::Handle {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            text: String::new(),
            parent: parent.copied(),
            children: Vec::new(),
            alive: true,
        });
        match parent {
            Some(p) => {
                if let Some(node) = self.node_mut(*p) {
                    node.children.push(id);
                }
            }
            None => self.roots.push(id),
        }
        trace!(?id, ?kind, ?parent, "element created");
        id
    }

    fn destroy_element(&mut self, handle: &Self::Handle) {
        let Some(parent) = self.node(*handle).map(|n| n.parent) else {
            return;
        };
        match parent {
            Some(p) => {
                if let Some(node) = self.node_mut(p) {
                    node.children.retain(|c| c != handle);
                }
            }
            None => self.roots.retain(|r| r != handle),
        }
        self.bury(*handle);
        trace!(id = ?handle, "element destroyed");
    }

    fn set_text(&mut self, handle: &Self::Handle, text: &str) {
        if let Some(node) = self.node_mut(*handle) {
            node.text = text.to_string();
        }
    }

    fn children(&self, parent: Option<&Self::Handle>) -> Vec<Self::Handle> {
        match parent {
            Some(p) => self
                .node(*p)
                .map(|n| n.children.clone())
                .unwrap_or_default(),
            None => self.roots.clone(),
        }
    }

    fn set_title(&mut self, text: &str) {
        self.title = text.to_string();
    }
}
