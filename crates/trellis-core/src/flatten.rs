//! Flattening a tree into the currently visible sequence.
//!
//! The visible sequence is the pre-order, depth-first, left-to-right
//! traversal of the forest, filtered so a node appears iff every ancestor
//! is expanded (roots always qualify). It is rebuilt in full after any
//! structural change; sequences are menu-sized, so recomputing from
//! scratch is cheaper than keeping an incremental structure honest.

use crate::node::{NodeId, Tree};

impl<T> Tree<T> {
    /// Flattens the forest into the ordered list of currently visible
    /// nodes.
    ///
    /// Pure with respect to tree state: an empty forest yields an empty
    /// sequence, and an expandable-but-childless node is emitted as a
    /// leaf regardless of its `expanded` flag.
    pub fn visible_sequence(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        for &root in self.roots() {
            self.emit_visible(root, &mut out);
        }
        out
    }

    fn emit_visible(&self, id: NodeId, out: &mut Vec<NodeId>) {
        let Some(node) = self.node(id) else {
            return;
        };
        out.push(id);
        if node.is_expanded() && !node.children().is_empty() {
            for &child in node.children() {
                self.emit_visible(child, out);
            }
        }
    }
}
