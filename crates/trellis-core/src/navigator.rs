//! Cursor movement over the visible sequence of a tree.
//!
//! [`TreeCursor`] pairs a cached visible sequence with a single selection
//! index and implements the WCAG tree-view keyboard semantics: circular
//! next/previous, Right expands-or-drills-into, Left collapses-or-drills-
//! to-parent, Home/End within the current sibling group, and absolute
//! jumps over the whole rendered tree. Every operation clamps the stored
//! index before acting, so an external structural change can never make
//! the cursor read out of bounds.

use crate::node::{NodeId, NodeKind, Tree};

/// Why a navigation operation did not change any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRejection {
    /// There is nothing to navigate.
    EmptyMenu,
    /// Right-arrow on a node that navigates as a leaf.
    NotExpandable,
    /// Left-arrow on a collapsed (or leaf) root.
    AtTopLevel,
}

/// Result of a navigation operation.
///
/// Rejections are ordinary outcomes, not errors: the host surfaces them
/// as a distinct cue and the cursor/tree are guaranteed untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// The cursor moved (or stayed put on a singleton wrap); the current
    /// node should be re-announced.
    Moved,
    /// The current node was expanded; the cursor stayed on it.
    Expanded,
    /// The current node was collapsed; the cursor stayed on it.
    Collapsed,
    /// Nothing changed; the reason says which cue to play.
    Rejected(NavRejection),
}

impl NavOutcome {
    /// Whether the operation was rejected without any state change.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Whether the operation changed tree topology (and therefore
    /// invalidated any search state built over the old sequence).
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Expanded | Self::Collapsed)
    }
}

/// A selection cursor over the visible sequence of a [`Tree`].
#[derive(Debug, Clone, Default)]
pub struct TreeCursor {
    visible: Vec<NodeId>,
    cursor: usize,
}

impl TreeCursor {
    /// Creates a cursor over the tree's current visible sequence,
    /// positioned at the first entry.
    pub fn new<T>(tree: &Tree<T>) -> Self {
        Self {
            visible: tree.visible_sequence(),
            cursor: 0,
        }
    }

    /// The cached visible sequence.
    pub fn visible(&self) -> &[NodeId] {
        &self.visible
    }

    /// Number of currently visible nodes.
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    /// Whether nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// The current selection index. Meaningless when empty.
    pub fn index(&self) -> usize {
        self.cursor
    }

    /// Key of the currently selected node, if any.
    pub fn current(&self) -> Option<NodeId> {
        self.visible.get(self.cursor).copied()
    }

    fn clamp(&mut self) {
        if !self.visible.is_empty() && self.cursor >= self.visible.len() {
            self.cursor = self.visible.len() - 1;
        }
    }

    /// Reflattens after an external structural change, clamping the
    /// cursor into the shrunken sequence if needed.
    pub fn refresh<T>(&mut self, tree: &Tree<T>) {
        self.visible = tree.visible_sequence();
        self.clamp();
    }

    /// Reflattens and keeps the cursor on `keep` at its position in the
    /// new sequence, clamping if the node is no longer visible.
    fn refresh_keeping<T>(&mut self, tree: &Tree<T>, keep: NodeId) {
        self.visible = tree.visible_sequence();
        match self.visible.iter().position(|&id| id == keep) {
            Some(pos) => self.cursor = pos,
            None => self.clamp(),
        }
    }

    /// Moves the cursor to an arbitrary index in the visible sequence,
    /// used by typeahead to land on a match.
    pub fn jump_to(&mut self, index: usize) -> NavOutcome {
        if self.visible.is_empty() {
            return NavOutcome::Rejected(NavRejection::EmptyMenu);
        }
        self.cursor = index.min(self.visible.len() - 1);
        NavOutcome::Moved
    }

    /// Moves to the next visible node, wrapping to the top.
    ///
    /// On a singleton sequence this is a positional no-op that still
    /// reports [`NavOutcome::Moved`] so the host re-announces.
    pub fn next(&mut self) -> NavOutcome {
        if self.visible.is_empty() {
            return NavOutcome::Rejected(NavRejection::EmptyMenu);
        }
        self.clamp();
        self.cursor = (self.cursor + 1) % self.visible.len();
        NavOutcome::Moved
    }

    /// Moves to the previous visible node, wrapping to the bottom.
    pub fn previous(&mut self) -> NavOutcome {
        if self.visible.is_empty() {
            return NavOutcome::Rejected(NavRejection::EmptyMenu);
        }
        self.clamp();
        self.cursor = (self.cursor + self.visible.len() - 1) % self.visible.len();
        NavOutcome::Moved
    }

    /// WCAG right-arrow: expand a collapsed branch (cursor stays on it),
    /// drill into the first child of an expanded one, reject on a leaf.
    pub fn expand_or_drill<T>(&mut self, tree: &mut Tree<T>) -> NavOutcome {
        self.clamp();
        let Some(id) = self.current() else {
            return NavOutcome::Rejected(NavRejection::EmptyMenu);
        };
        if tree.is_effective_leaf(id) {
            return NavOutcome::Rejected(NavRejection::NotExpandable);
        }
        let (expanded, first_child) = match tree.node(id) {
            Some(node) => (node.is_expanded(), node.children().first().copied()),
            None => return NavOutcome::Rejected(NavRejection::EmptyMenu),
        };
        if !expanded {
            tree.set_expanded(id, true);
            self.refresh_keeping(tree, id);
            return NavOutcome::Expanded;
        }
        // Already expanded, and the leaf check above guarantees at least
        // one child; in pre-order it sits right after its parent.
        let Some(first_child) = first_child else {
            return NavOutcome::Rejected(NavRejection::NotExpandable);
        };
        if let Some(pos) = self.visible.iter().position(|&v| v == first_child) {
            self.cursor = pos;
        }
        NavOutcome::Moved
    }

    /// WCAG left-arrow: collapse an expanded branch (cursor stays on
    /// it), otherwise move to the parent without collapsing it, reject
    /// on a top-level collapsed node or leaf.
    pub fn collapse_or_ascend<T>(&mut self, tree: &mut Tree<T>) -> NavOutcome {
        self.clamp();
        let Some(id) = self.current() else {
            return NavOutcome::Rejected(NavRejection::EmptyMenu);
        };
        let expanded_branch = tree
            .node(id)
            .is_some_and(|n| n.is_expanded() && !tree.is_effective_leaf(id));
        if expanded_branch {
            tree.set_expanded(id, false);
            self.refresh_keeping(tree, id);
            return NavOutcome::Collapsed;
        }
        match tree.parent_of(id) {
            Some(parent) => {
                // Drill-up is navigation, not structural collapse.
                if let Some(pos) = self.visible.iter().position(|&v| v == parent) {
                    self.cursor = pos;
                }
                NavOutcome::Moved
            }
            None => NavOutcome::Rejected(NavRejection::AtTopLevel),
        }
    }

    /// Moves to the first node of the current sibling group (same
    /// parent, not merely same depth anywhere in the tree).
    pub fn home_within_level<T>(&mut self, tree: &Tree<T>) -> NavOutcome {
        self.move_within_level(tree, true)
    }

    /// Moves to the last node of the current sibling group.
    pub fn end_within_level<T>(&mut self, tree: &Tree<T>) -> NavOutcome {
        self.move_within_level(tree, false)
    }

    fn move_within_level<T>(&mut self, tree: &Tree<T>, home: bool) -> NavOutcome {
        self.clamp();
        let Some(id) = self.current() else {
            return NavOutcome::Rejected(NavRejection::EmptyMenu);
        };
        let siblings = match tree.parent_of(id) {
            Some(parent) => tree.children_of(parent),
            None => tree.roots(),
        };
        let target = if home {
            siblings.first()
        } else {
            siblings.last()
        };
        if let Some(&target) = target {
            if let Some(pos) = self.visible.iter().position(|&v| v == target) {
                self.cursor = pos;
            }
        }
        NavOutcome::Moved
    }

    /// Jumps to the very first visible node.
    pub fn absolute_home(&mut self) -> NavOutcome {
        if self.visible.is_empty() {
            return NavOutcome::Rejected(NavRejection::EmptyMenu);
        }
        self.cursor = 0;
        NavOutcome::Moved
    }

    /// Jumps to the true bottom of the rendered tree.
    ///
    /// Pre-order flattening guarantees the last sequence entry is the
    /// deepest-last visible descendant, not merely the last top-level
    /// row.
    pub fn absolute_end(&mut self) -> NavOutcome {
        if self.visible.is_empty() {
            return NavOutcome::Rejected(NavRejection::EmptyMenu);
        }
        self.cursor = self.visible.len() - 1;
        NavOutcome::Moved
    }

    /// Expands every currently-collapsed expandable node of `kind`
    /// anywhere in the tree, reflattens once, and returns how many nodes
    /// were newly expanded.
    ///
    /// Zero is a distinct, user-visible outcome meaning "already all
    /// expanded".
    pub fn expand_all_of_kind<T>(&mut self, tree: &mut Tree<T>, kind: NodeKind) -> usize {
        let keep = self.current();
        let targets: Vec<NodeId> = tree
            .ids()
            .filter(|&id| {
                tree.node(id).is_some_and(|n| {
                    n.kind() == kind && !n.is_expanded() && !tree.is_effective_leaf(id)
                })
            })
            .collect();
        let count = targets.len();
        for id in targets {
            tree.set_expanded(id, true);
        }
        if count > 0 {
            tracing::debug!(
                target: crate::logging::targets::NAVIGATOR,
                count,
                "expanded all nodes of kind {kind:?}"
            );
            match keep {
                Some(keep) => self.refresh_keeping(tree, keep),
                None => self.refresh(tree),
            }
        }
        count
    }

    /// Best-effort cursor restore after the underlying tree was rebuilt.
    ///
    /// Reflattens, then looks for the first exact label match in the new
    /// sequence; failing that, clamps to `min(old_cursor, len - 1)`.
    /// With duplicate labels this restores to the first occurrence, a
    /// known imprecision of label-keyed identity.
    pub fn restore_after_rebuild<T>(
        &mut self,
        tree: &Tree<T>,
        label: Option<&str>,
        old_cursor: usize,
    ) {
        self.visible = tree.visible_sequence();
        let found = label.and_then(|label| {
            self.visible
                .iter()
                .position(|&id| tree.node(id).is_some_and(|n| n.label() == label))
        });
        match found {
            Some(pos) => self.cursor = pos,
            None => {
                self.cursor = old_cursor;
                self.clamp();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Root[A(expandable, collapsed; children A1, A2), B(leaf)].
    fn scenario_tree() -> (Tree<()>, NodeId, NodeId, NodeId, NodeId) {
        let mut tree = Tree::new();
        let a = tree.add_root("A", NodeKind::Group, true, ());
        let a1 = tree.add_child(a, "A1", NodeKind::Entry, false, ()).unwrap();
        let a2 = tree.add_child(a, "A2", NodeKind::Entry, false, ()).unwrap();
        let b = tree.add_root("B", NodeKind::Detail, false, ());
        (tree, a, a1, a2, b)
    }

    #[test]
    fn test_expand_keeps_cursor_on_node() {
        let (mut tree, a, a1, a2, b) = scenario_tree();
        let mut cursor = TreeCursor::new(&tree);
        assert_eq!(cursor.visible(), &[a, b]);

        assert_eq!(cursor.expand_or_drill(&mut tree), NavOutcome::Expanded);
        assert_eq!(cursor.visible(), &[a, a1, a2, b]);
        assert_eq!(cursor.current(), Some(a));
    }

    #[test]
    fn test_second_expand_drills_to_first_child() {
        let (mut tree, _, a1, _, _) = scenario_tree();
        let mut cursor = TreeCursor::new(&tree);
        cursor.expand_or_drill(&mut tree);
        assert_eq!(cursor.expand_or_drill(&mut tree), NavOutcome::Moved);
        assert_eq!(cursor.current(), Some(a1));
    }

    #[test]
    fn test_expand_rejected_on_leaf() {
        let (mut tree, a, _, _, b) = scenario_tree();
        let mut cursor = TreeCursor::new(&tree);
        cursor.next();
        assert_eq!(cursor.current(), Some(b));
        assert_eq!(
            cursor.expand_or_drill(&mut tree),
            NavOutcome::Rejected(NavRejection::NotExpandable)
        );
        assert_eq!(cursor.current(), Some(b));
        assert_eq!(cursor.visible(), &[a, b]);
    }

    #[test]
    fn test_wraparound_round_trip() {
        let (mut tree, _, _, _, _) = scenario_tree();
        tree.set_expanded(tree.roots()[0], true);
        let mut cursor = TreeCursor::new(&tree);
        let start = cursor.current();
        for _ in 0..cursor.len() {
            assert_eq!(cursor.next(), NavOutcome::Moved);
        }
        assert_eq!(cursor.current(), start);
        cursor.next();
        cursor.previous();
        assert_eq!(cursor.current(), start);
    }

    #[test]
    fn test_singleton_wrap_still_reports_moved() {
        let mut tree = Tree::new();
        let only = tree.add_root("Only", NodeKind::Detail, false, ());
        let mut cursor = TreeCursor::new(&tree);
        assert_eq!(cursor.next(), NavOutcome::Moved);
        assert_eq!(cursor.current(), Some(only));
    }

    #[test]
    fn test_empty_sequence_rejects_everything() {
        let mut tree: Tree<()> = Tree::new();
        let mut cursor = TreeCursor::new(&tree);
        assert!(cursor.next().is_rejected());
        assert_eq!(cursor.next(), NavOutcome::Rejected(NavRejection::EmptyMenu));
        assert_eq!(
            cursor.previous(),
            NavOutcome::Rejected(NavRejection::EmptyMenu)
        );
        assert_eq!(
            cursor.expand_or_drill(&mut tree),
            NavOutcome::Rejected(NavRejection::EmptyMenu)
        );
        assert_eq!(
            cursor.absolute_end(),
            NavOutcome::Rejected(NavRejection::EmptyMenu)
        );
    }

    #[test]
    fn test_collapse_then_ascend_then_top_level_rejection() {
        let (mut tree, a, _, a2, _) = scenario_tree();
        let mut cursor = TreeCursor::new(&tree);
        cursor.expand_or_drill(&mut tree);
        cursor.next();
        cursor.next();
        assert_eq!(cursor.current(), Some(a2));

        // Leaf child: left moves to the parent without collapsing it.
        assert_eq!(cursor.collapse_or_ascend(&mut tree), NavOutcome::Moved);
        assert_eq!(cursor.current(), Some(a));
        assert!(tree.node(a).unwrap().is_expanded());

        // Expanded parent: left collapses, cursor stays.
        assert_eq!(cursor.collapse_or_ascend(&mut tree), NavOutcome::Collapsed);
        assert_eq!(cursor.current(), Some(a));

        // Collapsed root: left is rejected.
        assert_eq!(
            cursor.collapse_or_ascend(&mut tree),
            NavOutcome::Rejected(NavRejection::AtTopLevel)
        );
    }

    #[test]
    fn test_expand_collapse_restores_prior_sequence() {
        let (mut tree, _, _, _, _) = scenario_tree();
        let mut cursor = TreeCursor::new(&tree);
        let before = cursor.visible().to_vec();
        let index = cursor.index();
        cursor.expand_or_drill(&mut tree);
        cursor.collapse_or_ascend(&mut tree);
        assert_eq!(cursor.visible(), before.as_slice());
        assert_eq!(cursor.index(), index);
    }

    #[test]
    fn test_home_end_stay_within_sibling_group() {
        let (mut tree, a, a1, a2, b) = scenario_tree();
        tree.set_expanded(a, true);
        let mut cursor = TreeCursor::new(&tree);
        cursor.next();
        assert_eq!(cursor.current(), Some(a1));

        // End within A's children stops at A2, not at B.
        assert_eq!(cursor.end_within_level(&tree), NavOutcome::Moved);
        assert_eq!(cursor.current(), Some(a2));
        assert_eq!(cursor.home_within_level(&tree), NavOutcome::Moved);
        assert_eq!(cursor.current(), Some(a1));

        // On a root, End jumps across the root list.
        cursor.collapse_or_ascend(&mut tree);
        cursor.refresh(&tree);
        assert_eq!(cursor.end_within_level(&tree), NavOutcome::Moved);
        assert_eq!(cursor.current(), Some(b));
    }

    #[test]
    fn test_absolute_end_reaches_deepest_last_descendant() {
        let mut tree = Tree::new();
        tree.add_root("First", NodeKind::Detail, false, ());
        let last = tree.add_root("Last", NodeKind::Group, true, ());
        tree.add_child(last, "Child1", NodeKind::Entry, false, ());
        let c2 = tree
            .add_child(last, "Child2", NodeKind::Group, true, ())
            .unwrap();
        let grandchild = tree
            .add_child(c2, "Grandchild", NodeKind::Detail, false, ())
            .unwrap();
        tree.set_expanded(last, true);
        tree.set_expanded(c2, true);

        let mut cursor = TreeCursor::new(&tree);
        assert_eq!(cursor.absolute_end(), NavOutcome::Moved);
        assert_eq!(cursor.current(), Some(grandchild));

        assert_eq!(cursor.absolute_home(), NavOutcome::Moved);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_expand_all_of_kind_counts_new_expansions() {
        let mut tree = Tree::new();
        let g1 = tree.add_root("G1", NodeKind::Group, true, ());
        tree.add_child(g1, "E1", NodeKind::Entry, false, ());
        let g2 = tree.add_root("G2", NodeKind::Group, true, ());
        tree.add_child(g2, "E2", NodeKind::Entry, true, ());
        let empty = tree.add_root("Empty", NodeKind::Group, true, ());
        tree.set_expanded(g1, true);

        let mut cursor = TreeCursor::new(&tree);
        // G2 is the only collapsed, non-empty Group; the expandable
        // Entry and the childless Group are both skipped.
        assert_eq!(cursor.expand_all_of_kind(&mut tree, NodeKind::Group), 1);
        assert!(tree.node(g2).unwrap().is_expanded());
        assert!(!tree.node(empty).unwrap().is_expanded());

        // Second pass: already all expanded.
        assert_eq!(cursor.expand_all_of_kind(&mut tree, NodeKind::Group), 0);
    }

    #[test]
    fn test_restore_after_rebuild_by_label() {
        let (mut tree, a, _, _, _) = scenario_tree();
        tree.set_expanded(a, true);
        let mut cursor = TreeCursor::new(&tree);
        cursor.next();
        cursor.next();
        let label = cursor
            .current()
            .and_then(|id| tree.node(id).map(|n| n.label().to_string()));
        let old = cursor.index();

        // Rebuild reorders: A2 now comes first among A's children.
        let mut rebuilt = Tree::new();
        let ra = rebuilt.add_root("A", NodeKind::Group, true, ());
        let ra2 = rebuilt
            .add_child(ra, "A2", NodeKind::Entry, false, ())
            .unwrap();
        rebuilt.add_child(ra, "A1", NodeKind::Entry, false, ());
        rebuilt.set_expanded(ra, true);

        cursor.restore_after_rebuild(&rebuilt, label.as_deref(), old);
        assert_eq!(cursor.current(), Some(ra2));
    }

    #[test]
    fn test_restore_clamps_when_label_gone() {
        let (mut tree, a, _, _, _) = scenario_tree();
        tree.set_expanded(a, true);
        let mut cursor = TreeCursor::new(&tree);
        cursor.absolute_end();
        let old = cursor.index();

        let mut rebuilt: Tree<()> = Tree::new();
        rebuilt.add_root("Z", NodeKind::Detail, false, ());
        cursor.restore_after_rebuild(&rebuilt, Some("B"), old);
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.len(), 1);
    }

    #[test]
    fn test_stale_cursor_clamps_before_acting() {
        let (mut tree, a, _, _, _) = scenario_tree();
        tree.set_expanded(a, true);
        let mut cursor = TreeCursor::new(&tree);
        cursor.absolute_end();

        // External collapse shrinks the sequence under the cursor.
        tree.set_expanded(a, false);
        cursor.refresh(&tree);
        assert!(cursor.index() < cursor.len());
        assert_eq!(cursor.next(), NavOutcome::Moved);
    }
}
