//! Per-screen menu session: one tree, one cursor, one search state.
//!
//! A [`MenuSession`] owns everything a single open menu needs and maps
//! key events onto the engine operations in `trellis-core`. It is
//! exclusively owned by the input-handling thread for its whole
//! open/close lifetime; every operation runs synchronously inside the
//! host's per-keystroke callback. After any mutating call the host
//! queries [`current_announcement_text`](MenuSession::current_announcement_text)
//! and [`last_feedback`](MenuSession::last_feedback) and hands the
//! results to its narration and cue channels.

use trellis_core::{
    LevelTracker, NavOutcome, NavRejection, Node, NodeKind, SearchOutcome, Tree, TreeCursor,
    Typeahead, announcement_for,
};

use crate::adapter::{MenuDelegate, MenuModel};
use crate::events::{Key, KeyResponse, KeyboardModifiers};

/// What the host should surface after the last session operation.
///
/// Rejections are deliberately distinct from announcements so the host
/// can play a different cue instead of narrating as if something
/// happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// State changed; announce the current selection.
    Announce,
    /// The delegate activated the current row.
    Activated,
    /// Enter on a row the delegate had no action for.
    NotActionable,
    /// Right-arrow on a row that navigates as a leaf.
    CannotExpand,
    /// Left-arrow with nowhere to go.
    AtTopLevel,
    /// There is nothing to navigate.
    EmptyMenu,
    /// Typeahead query with zero matches; narrate "no matches for X".
    NoMatches(String),
    /// The typeahead buffer was cleared.
    SearchCleared,
    /// Expand-all ran; zero means everything was already expanded.
    ExpandedAll(usize),
}

/// Keyboard-driven controller for one menu screen.
pub struct MenuSession<M: MenuModel, D: MenuDelegate<M::Payload>> {
    context: String,
    model: M,
    delegate: D,
    tree: Tree<M::Payload>,
    cursor: TreeCursor,
    search: Typeahead,
    levels: LevelTracker,
    feedback: Feedback,
}

impl<M: MenuModel, D: MenuDelegate<M::Payload>> MenuSession<M, D> {
    /// Opens a session: builds the tree from the model and places the
    /// cursor on the first visible node.
    pub fn new(context: impl Into<String>, model: M, delegate: D) -> Self {
        let context = context.into();
        let tree = model.build_tree();
        let cursor = TreeCursor::new(&tree);
        tracing::debug!(
            target: "trellis::session",
            context = %context,
            nodes = tree.len(),
            "menu session opened"
        );
        Self {
            context,
            model,
            delegate,
            tree,
            cursor,
            search: Typeahead::new(),
            levels: LevelTracker::new(),
            feedback: Feedback::Announce,
        }
    }

    /// The context key identifying this menu, used for level tracking
    /// and registry bookkeeping.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Read access to the session's tree.
    pub fn tree(&self) -> &Tree<M::Payload> {
        &self.tree
    }

    /// Read access to the cursor and visible sequence.
    pub fn cursor(&self) -> &TreeCursor {
        &self.cursor
    }

    /// Read access to the typeahead state.
    pub fn search(&self) -> &Typeahead {
        &self.search
    }

    /// What the last operation asked the host to surface.
    pub fn last_feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// The node under the cursor, if any.
    pub fn current_selection(&self) -> Option<&Node<M::Payload>> {
        self.cursor.current().and_then(|id| self.tree.node(id))
    }

    /// The full announcement for the node under the cursor: label,
    /// sibling position, expansion state, and a level suffix when the
    /// indentation level changed since the last announcement.
    pub fn current_announcement_text(&mut self) -> String {
        announcement_for(&self.tree, &self.cursor, &mut self.levels, &self.context)
    }

    // =========================================================================
    // Input entry points
    // =========================================================================

    /// Handles a named key, returning whether it was consumed.
    pub fn handle_key(&mut self, key: Key, modifiers: KeyboardModifiers) -> KeyResponse {
        match key {
            Key::ArrowDown => {
                let outcome = self.cursor.next();
                self.apply_nav(outcome)
            }
            Key::ArrowUp => {
                let outcome = self.cursor.previous();
                self.apply_nav(outcome)
            }
            Key::ArrowRight => {
                let outcome = self.cursor.expand_or_drill(&mut self.tree);
                self.apply_nav(outcome)
            }
            Key::ArrowLeft => {
                let outcome = self.cursor.collapse_or_ascend(&mut self.tree);
                self.apply_nav(outcome)
            }
            Key::Home => {
                let outcome = if modifiers.control {
                    self.cursor.absolute_home()
                } else {
                    self.cursor.home_within_level(&self.tree)
                };
                self.apply_nav(outcome)
            }
            Key::End => {
                let outcome = if modifiers.control {
                    self.cursor.absolute_end()
                } else {
                    self.cursor.end_within_level(&self.tree)
                };
                self.apply_nav(outcome)
            }
            Key::Enter => self.handle_enter(),
            Key::Delete => self.handle_delete(),
            Key::Backspace => self.handle_backspace(),
            Key::Escape => {
                if self.search.is_active() {
                    self.search.clear();
                    self.feedback = Feedback::SearchCleared;
                    KeyResponse::Handled
                } else {
                    // Let the host's default Escape handling close the
                    // menu.
                    KeyResponse::NotHandled
                }
            }
        }
    }

    /// Handles a printable character as typeahead input.
    pub fn handle_character(&mut self, c: char) -> KeyResponse {
        if c.is_control() {
            return KeyResponse::NotHandled;
        }
        let labels = self.visible_labels();
        let outcome = self.search.process_char(c, &labels, self.cursor.index());
        self.apply_search(outcome)
    }

    // =========================================================================
    // Operations without a default key binding
    // =========================================================================

    /// Moves to the next typeahead match after the cursor, wrapping.
    /// Returns whether there was an active match set to cycle through.
    pub fn cycle_match_forward(&mut self) -> bool {
        match self.search.next_match(self.cursor.index()) {
            Some(index) => {
                self.cursor.jump_to(index);
                self.feedback = Feedback::Announce;
                true
            }
            None => false,
        }
    }

    /// Moves to the previous typeahead match before the cursor,
    /// wrapping.
    pub fn cycle_match_backward(&mut self) -> bool {
        match self.search.previous_match(self.cursor.index()) {
            Some(index) => {
                self.cursor.jump_to(index);
                self.feedback = Feedback::Announce;
                true
            }
            None => false,
        }
    }

    /// Expands every collapsed [`NodeKind::Group`] node anywhere in the
    /// tree and reports how many were newly expanded; zero means the
    /// tree was already fully expanded at the group level.
    pub fn expand_all_groups(&mut self) -> usize {
        let count = self.cursor.expand_all_of_kind(&mut self.tree, NodeKind::Group);
        if count > 0 {
            // Structural change: old match indices are meaningless.
            self.search.clear();
        }
        self.feedback = Feedback::ExpandedAll(count);
        count
    }

    /// Rebuilds the tree from the model after the underlying domain
    /// changed, restoring the cursor to the first node with the same
    /// label (else clamping) and dropping any search state.
    pub fn rebuild(&mut self) {
        let label = self.current_selection().map(|n| n.label().to_string());
        let old_cursor = self.cursor.index();
        self.tree = self.model.build_tree();
        self.cursor
            .restore_after_rebuild(&self.tree, label.as_deref(), old_cursor);
        self.search.clear();
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn handle_enter(&mut self) -> KeyResponse {
        let Some(id) = self.cursor.current() else {
            self.feedback = Feedback::EmptyMenu;
            return KeyResponse::Handled;
        };
        if !self.tree.is_effective_leaf(id) {
            let expanded = self.tree.node(id).is_some_and(|n| n.is_expanded());
            let outcome = if expanded {
                self.cursor.collapse_or_ascend(&mut self.tree)
            } else {
                self.cursor.expand_or_drill(&mut self.tree)
            };
            return self.apply_nav(outcome);
        }
        let performed = match self.tree.node(id) {
            Some(node) => self.delegate.activate(node.kind(), node),
            None => false,
        };
        self.feedback = if performed {
            Feedback::Activated
        } else {
            Feedback::NotActionable
        };
        KeyResponse::Handled
    }

    fn handle_delete(&mut self) -> KeyResponse {
        let Some(id) = self.cursor.current() else {
            return KeyResponse::NotHandled;
        };
        let removed = match self.tree.node(id) {
            Some(node) => self.delegate.remove(node.kind(), node),
            None => false,
        };
        if removed {
            self.rebuild();
            self.feedback = Feedback::Announce;
            KeyResponse::Handled
        } else {
            KeyResponse::NotHandled
        }
    }

    fn handle_backspace(&mut self) -> KeyResponse {
        if !self.search.is_active() {
            return KeyResponse::NotHandled;
        }
        let labels = self.visible_labels();
        let outcome = self.search.process_backspace(&labels, self.cursor.index());
        self.apply_search(outcome)
    }

    fn apply_nav(&mut self, outcome: NavOutcome) -> KeyResponse {
        if outcome.is_structural() {
            // Expand/collapse invalidates match indices over the old
            // visible sequence.
            self.search.clear();
        }
        self.feedback = match outcome {
            NavOutcome::Moved | NavOutcome::Expanded | NavOutcome::Collapsed => Feedback::Announce,
            NavOutcome::Rejected(NavRejection::EmptyMenu) => Feedback::EmptyMenu,
            NavOutcome::Rejected(NavRejection::NotExpandable) => Feedback::CannotExpand,
            NavOutcome::Rejected(NavRejection::AtTopLevel) => Feedback::AtTopLevel,
        };
        KeyResponse::Handled
    }

    fn apply_search(&mut self, outcome: SearchOutcome) -> KeyResponse {
        match outcome {
            SearchOutcome::Matched { index } => {
                self.cursor.jump_to(index);
                self.feedback = Feedback::Announce;
                KeyResponse::Handled
            }
            SearchOutcome::NoMatches { query } => {
                self.feedback = Feedback::NoMatches(query);
                KeyResponse::Handled
            }
            SearchOutcome::Cleared => {
                self.feedback = Feedback::SearchCleared;
                KeyResponse::Handled
            }
            SearchOutcome::Inactive => KeyResponse::NotHandled,
        }
    }

    fn visible_labels(&self) -> Vec<String> {
        self.cursor
            .visible()
            .iter()
            .filter_map(|&id| self.tree.node(id))
            .map(|n| n.label().to_string())
            .collect()
    }
}

impl<M: MenuModel, D: MenuDelegate<M::Payload>> Drop for MenuSession<M, D> {
    fn drop(&mut self) {
        tracing::debug!(
            target: "trellis::session",
            context = %self.context,
            "menu session closed"
        );
    }
}
