//! DOM tree implementation for the Wren engine.
//!
//! This crate provides an arena-based DOM tree structure following the
//! [DOM Living Standard](https://dom.spec.whatwg.org/).
//!
//! # Design
//!
//! Every node lives in one `Vec` and is addressed by [`NodeId`]. Ownership
//! runs forward only: a parent reaches its children through `first_child`
//! and the `next_sibling` chain. `parent`, `prev_sibling` and `last_child`
//! are plain indices used for upward and backward navigation.

/// Element payload: tag vocabulary and attributes.
pub mod element;
/// Tree queries used by the rendering pipeline.
pub mod query;

pub use element::{Attribute, Element, ElementKind};
pub use query::{get_style_content, get_target_element_node};

use thiserror::Error;

/// Structural errors raised while building or mutating a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// The tag name is not part of the closed element vocabulary.
    #[error("unknown element: <{0}>")]
    UnknownElement(String),
    /// `remove_child` was given a node that is not a child of the parent.
    #[error("node {child:?} is not a child of {parent:?}")]
    NotAChild {
        /// The would-be parent.
        parent: NodeId,
        /// The node that was not found among its children.
        child: NodeId,
    },
    /// Only Document and Element nodes may have children.
    #[error("text node {0:?} cannot have children")]
    TextCannotHaveChildren(NodeId),
}

/// A type-safe index into the DOM tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The Document node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// "Each node has an associated node type"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// [§ 4.5 Interface Document](https://dom.spec.whatwg.org/#interface-document)
    Document,
    /// [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
    Element(Element),
    /// [§ 4.10 Interface Text](https://dom.spec.whatwg.org/#interface-text)
    Text(String),
}

/// One node of the tree with its navigation links.
#[derive(Debug, Clone)]
pub struct Node {
    /// Kind-specific payload.
    pub kind: NodeKind,
    parent: Option<NodeId>,
    first_child: Option<NodeId>,
    last_child: Option<NodeId>,
    prev_sibling: Option<NodeId>,
    next_sibling: Option<NodeId>,
}

impl Node {
    const fn detached(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
        }
    }
}

/// Arena-based DOM tree.
///
/// [§ 4 Nodes](https://dom.spec.whatwg.org/#nodes)
///
/// "The DOM represents a document as a tree."
#[derive(Debug, Clone)]
pub struct DomTree {
    /// All nodes, indexed by [`NodeId`]. The Document is at [`NodeId::ROOT`].
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the Document node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::detached(NodeKind::Document)],
        }
    }

    /// The Document node.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a mutable reference to a node by its ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Number of allocated nodes, attached or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the Document node is allocated up front.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a detached node and return its ID.
    pub fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::detached(kind));
        id
    }

    /// [§ 4.2.2 Append](https://dom.spec.whatwg.org/#concept-node-append)
    ///
    /// Appends `child` as the last child of `parent`, setting the parent and
    /// both sibling links symmetrically.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::TextCannotHaveChildren`] if `parent` is a Text node.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if matches!(self.nodes[parent.0].kind, NodeKind::Text(_)) {
            return Err(DomError::TextCannotHaveChildren(parent));
        }

        let prev_last_child = self.nodes[parent.0].last_child;
        match prev_last_child {
            Some(prev) => {
                self.nodes[prev.0].next_sibling = Some(child);
                self.nodes[child.0].prev_sibling = Some(prev);
            }
            None => self.nodes[parent.0].first_child = Some(child),
        }
        self.nodes[parent.0].last_child = Some(child);
        self.nodes[child.0].parent = Some(parent);
        Ok(())
    }

    /// [§ 4.2.3 Remove](https://dom.spec.whatwg.org/#concept-node-remove)
    ///
    /// Detaches `child` from `parent`, joining its former siblings to each
    /// other. The detached node keeps its own children.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::NotAChild`] if `child` is not a child of `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if self.parent(child) != Some(parent) {
            return Err(DomError::NotAChild { parent, child });
        }

        let prev = self.nodes[child.0].prev_sibling;
        let next = self.nodes[child.0].next_sibling;

        match prev {
            Some(prev) => self.nodes[prev.0].next_sibling = next,
            None => self.nodes[parent.0].first_child = next,
        }
        match next {
            Some(next) => self.nodes[next.0].prev_sibling = prev,
            None => self.nodes[parent.0].last_child = prev,
        }

        let node = &mut self.nodes[child.0];
        node.parent = None;
        node.prev_sibling = None;
        node.next_sibling = None;
        Ok(())
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get the first child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.first_child)
    }

    /// Get the last child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.last_child)
    }

    /// Get the next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling)
    }

    /// Get the previous sibling of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling)
    }

    /// Iterate over the children of a node in insertion order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> ChildIterator<'_> {
        ChildIterator {
            tree: self,
            current: self.first_child(id),
        }
    }

    /// Iterate over all ancestors of a node, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&Element> {
        self.get(id).and_then(|n| match &n.kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        })
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.kind {
            NodeKind::Text(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// The element kind of an element node.
    #[must_use]
    pub fn element_kind(&self, id: NodeId) -> Option<ElementKind> {
        self.as_element(id).map(|e| e.kind)
    }

    /// [§ 3.1.1 The document element](https://html.spec.whatwg.org/multipage/dom.html#the-html-element-2)
    ///
    /// "The document element of a document is the element whose parent is that
    /// document, if it exists; otherwise null."
    #[must_use]
    pub fn document_element(&self) -> Option<NodeId> {
        self.children(NodeId::ROOT)
            .find(|&id| self.as_element(id).is_some())
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the children of a node, following `next_sibling`.
pub struct ChildIterator<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for ChildIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.next_sibling(id);
        Some(id)
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

/// The browsing context that owns a document tree.
#[derive(Debug, Clone, Default)]
pub struct Window {
    document: DomTree,
}

impl Window {
    /// A window holding an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The document tree.
    #[must_use]
    pub const fn document(&self) -> &DomTree {
        &self.document
    }

    /// The document tree, mutably.
    pub const fn document_mut(&mut self) -> &mut DomTree {
        &mut self.document
    }
}
