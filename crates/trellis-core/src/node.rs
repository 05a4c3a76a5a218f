//! Node model and tree arena for navigable menu hierarchies.
//!
//! A [`Tree`] owns every [`Node`] in a slotmap arena and keeps an ordered
//! list of roots. Parent links are plain [`NodeId`] keys rather than
//! ownership edges; a stale key simply fails to resolve, so upward walks
//! are always safe. Child order is display order and is preserved across
//! label and expansion changes.

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Stable key for a node in a [`Tree`] arena.
    pub struct NodeId;
}

/// Classifies what a node represents, so the session's dispatch table can
/// act on it without the tree carrying behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeKind {
    /// A grouping row (category, folder). Target of expand-all.
    Group,
    /// A primary row that may itself expand into detail rows.
    #[default]
    Entry,
    /// A leaf detail row.
    Detail,
}

/// A single entry in a navigable hierarchy.
///
/// Fields are read through accessors; mutation goes through [`Tree`] so
/// depth and linkage stay internally consistent.
#[derive(Debug, Clone)]
pub struct Node<T> {
    label: String,
    depth: usize,
    expandable: bool,
    expanded: bool,
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    payload: T,
}

impl<T> Node<T> {
    /// The display/announcement text for this node.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Indentation level: 0 for roots, `parent.depth + 1` otherwise.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether this node can be expanded at all.
    ///
    /// A node can be expandable while currently childless (for example
    /// after an external deletion); such a node navigates as a leaf.
    pub fn is_expandable(&self) -> bool {
        self.expandable
    }

    /// Whether this node is expanded. Meaningless when not expandable.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// The node's kind tag.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Key of the parent node, if any.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Keys of the children, in display order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The opaque domain handle this node represents.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Mutable access to the domain handle.
    pub fn payload_mut(&mut self) -> &mut T {
        &mut self.payload
    }
}

/// A rooted forest of expandable nodes stored in a slotmap arena.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    nodes: SlotMap<NodeId, Node<T>>,
    roots: Vec<NodeId>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            roots: Vec::new(),
        }
    }

    /// Adds a root node at the end of the root list.
    pub fn add_root(
        &mut self,
        label: impl Into<String>,
        kind: NodeKind,
        expandable: bool,
        payload: T,
    ) -> NodeId {
        let id = self.nodes.insert(Node {
            label: label.into(),
            depth: 0,
            expandable,
            expanded: false,
            kind,
            parent: None,
            children: Vec::new(),
            payload,
        });
        self.roots.push(id);
        id
    }

    /// Adds a child at the end of `parent`'s child list.
    ///
    /// Returns `None` if `parent` does not resolve.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        label: impl Into<String>,
        kind: NodeKind,
        expandable: bool,
        payload: T,
    ) -> Option<NodeId> {
        let depth = self.nodes.get(parent)?.depth + 1;
        let id = self.nodes.insert(Node {
            label: label.into(),
            depth,
            expandable,
            expanded: false,
            kind,
            parent: Some(parent),
            children: Vec::new(),
            payload,
        });
        // Parent existed a moment ago; re-borrow to link.
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(id);
            Some(id)
        } else {
            self.nodes.remove(id);
            None
        }
    }

    /// Detaches `id` from its parent (or the root list) and drops the
    /// entire subtree, returning the payload of the removed node.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        match self.nodes.get(id)?.parent {
            Some(parent) => {
                if let Some(node) = self.nodes.get_mut(parent) {
                    node.children.retain(|&child| child != id);
                }
            }
            None => self.roots.retain(|&root| root != id),
        }
        self.remove_subtree(id)
    }

    fn remove_subtree(&mut self, id: NodeId) -> Option<T> {
        let node = self.nodes.remove(id)?;
        for child in node.children {
            self.remove_subtree(child);
        }
        Some(node.payload)
    }

    /// Looks up a node by key.
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id)
    }

    /// Mutable lookup, for payload access.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.nodes.get_mut(id)
    }

    /// Replaces a node's label as underlying data changes.
    pub fn set_label(&mut self, id: NodeId, label: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.label = label.into();
        }
    }

    /// Sets the expansion flag. Ignored on non-expandable nodes.
    pub fn set_expanded(&mut self, id: NodeId, expanded: bool) {
        if let Some(node) = self.nodes.get_mut(id) {
            if node.expandable {
                node.expanded = expanded;
            }
        }
    }

    /// The ordered root keys.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Total node count, visible or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Key of the parent of `id`, if any.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    /// Children of `id`, in display order. Empty slice for stale keys.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Sibling position of `id` within its parent's child list (or the
    /// root list), as `(index, total)` with a zero-based index.
    ///
    /// Computed from the parent's children, never from adjacency in the
    /// visible sequence: adjacent visible nodes may have different
    /// parents and therefore different totals.
    pub fn sibling_position(&self, id: NodeId) -> Option<(usize, usize)> {
        let siblings = match self.nodes.get(id)?.parent {
            Some(parent) => self.children_of(parent),
            None => self.roots.as_slice(),
        };
        let index = siblings.iter().position(|&sibling| sibling == id)?;
        Some((index, siblings.len()))
    }

    /// Whether `id` navigates as a leaf: not expandable, or expandable
    /// with no children currently present.
    pub fn is_effective_leaf(&self, id: NodeId) -> bool {
        self.nodes
            .get(id)
            .is_none_or(|n| !n.expandable || n.children.is_empty())
    }

    /// Iterates over every node key in the arena, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys()
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
    }
}
