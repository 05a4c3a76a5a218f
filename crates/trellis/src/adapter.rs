//! Host-facing seams between domain data and the navigation engine.
//!
//! The engine never learns how to turn items, editor fields, or save
//! files into nodes. Each screen supplies a [`MenuModel`] that builds a
//! fresh [`Tree`] from its domain records, written by hand as an
//! explicit, statically-typed adapter, and a [`MenuDelegate`] that
//! dispatches activation and deletion by [`NodeKind`] so the tree stays
//! plain data with no embedded behavior.

use trellis_core::{Node, NodeKind, Tree};

/// Builds the navigable tree for one screen from its domain records.
///
/// Called once when the session opens and again on every
/// [`rebuild`](crate::session::MenuSession::rebuild); `build_tree` must
/// produce children in stable display order so cursor restore by label
/// behaves predictably.
pub trait MenuModel {
    /// The opaque domain handle carried on each node.
    type Payload;

    /// Converts the current domain state into a tree.
    fn build_tree(&self) -> Tree<Self::Payload>;
}

/// Domain actions the session dispatches on behalf of the user.
///
/// The session owns the dispatch; implementations switch on the node's
/// [`NodeKind`] and payload rather than storing closures in the tree.
pub trait MenuDelegate<T> {
    /// Enter on a leaf (or otherwise non-expandable) row.
    ///
    /// Returns whether the row was actionable; `false` lets the session
    /// report a rejection cue instead of pretending something happened.
    fn activate(&mut self, kind: NodeKind, node: &Node<T>) -> bool;

    /// Delete on the current row.
    ///
    /// Returns whether the domain actually changed; `true` makes the
    /// session rebuild its tree and restore the cursor.
    fn remove(&mut self, _kind: NodeKind, _node: &Node<T>) -> bool {
        false
    }
}
