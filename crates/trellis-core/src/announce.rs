//! Announcement text helpers for the narration channel.
//!
//! Everything here returns plain strings and knows nothing about any
//! narration backend; the host wires the output to whatever speech or
//! braille channel it has. Position and expansion formatting are pure;
//! [`LevelTracker`] carries the one piece of deliberate mutable state,
//! the last depth announced per menu context, so "level N" is spoken
//! only when the indentation level actually changes.

use std::collections::HashMap;

use crate::node::{Node, Tree};
use crate::navigator::TreeCursor;

/// Formats a sibling position as `"N of M"` (1-based).
///
/// Returns `None` when there is at most one sibling: announcing
/// "1 of 1" on every row is noise.
pub fn format_position(index: usize, total: usize) -> Option<String> {
    if total <= 1 {
        None
    } else {
        Some(format!("{} of {}", index + 1, total))
    }
}

/// Describes a node's expansion state for narration.
///
/// Effective leaves (non-expandable, or expandable with no children)
/// yield the empty string.
pub fn expansion_state(expandable: bool, expanded: bool, has_children: bool) -> &'static str {
    if !expandable || !has_children {
        ""
    } else if expanded {
        "expanded"
    } else {
        "collapsed"
    }
}

/// Remembers the last announced depth per menu context, keyed by the
/// session's context string.
#[derive(Debug, Clone, Default)]
pub struct LevelTracker {
    last_depth: HashMap<String, usize>,
}

impl LevelTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `" level N."` (1-based) when `depth` differs from the
    /// depth last announced for `context`, updating the remembered
    /// value; `None` when the level is unchanged.
    pub fn level_suffix(&mut self, context: &str, depth: usize) -> Option<String> {
        match self.last_depth.get(context) {
            Some(&last) if last == depth => None,
            _ => {
                self.last_depth.insert(context.to_string(), depth);
                Some(format!(" level {}.", depth + 1))
            }
        }
    }

    /// Forgets the remembered depth for one context. Called when a menu
    /// session opens or closes so the first move always announces its
    /// level.
    pub fn reset(&mut self, context: &str) {
        self.last_depth.remove(context);
    }

    /// Forgets every context.
    pub fn clear(&mut self) {
        self.last_depth.clear();
    }
}

/// Composes the full announcement for the node under the cursor:
/// label, sibling position, expansion state, and level suffix.
pub fn announcement_for<T>(
    tree: &Tree<T>,
    cursor: &TreeCursor,
    levels: &mut LevelTracker,
    context: &str,
) -> String {
    let Some(id) = cursor.current() else {
        return String::new();
    };
    let Some(node) = tree.node(id) else {
        return String::new();
    };
    let mut text = node.label().to_string();
    if let Some((index, total)) = tree.sibling_position(id) {
        if let Some(position) = format_position(index, total) {
            text.push_str(", ");
            text.push_str(&position);
        }
    }
    let state = expansion_state(
        node.is_expandable(),
        node.is_expanded(),
        !node.children().is_empty(),
    );
    if !state.is_empty() {
        text.push_str(", ");
        text.push_str(state);
    }
    if let Some(suffix) = levels.level_suffix(context, node.depth()) {
        text.push_str(&suffix);
    }
    text
}

/// Describes a node directly, without position or level context; used
/// for re-announcing the current row after label-only changes.
pub fn describe_node<T>(node: &Node<T>) -> String {
    let state = expansion_state(
        node.is_expandable(),
        node.is_expanded(),
        !node.children().is_empty(),
    );
    if state.is_empty() {
        node.label().to_string()
    } else {
        format!("{}, {}", node.label(), state)
    }
}
