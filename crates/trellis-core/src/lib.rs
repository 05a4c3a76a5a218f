//! Core engine for Trellis, a keyboard-only, screen-reader-oriented
//! navigation layer for hierarchical menus.
//!
//! This crate holds the generic algorithms shared by every menu screen:
//!
//! - **Node model**: a slotmap-backed [`Tree`] of labeled, expandable
//!   nodes carrying an opaque domain payload
//! - **Flattening**: the ancestor-expanded filter over pre-order
//!   traversal that yields the currently visible sequence
//! - **Navigation**: [`TreeCursor`], a single selection index with WCAG
//!   tree-view keyboard semantics (wrap, expand-or-drill,
//!   collapse-or-ascend, sibling-group Home/End, absolute jumps)
//! - **Typeahead**: [`Typeahead`], incremental case-insensitive
//!   substring search with match cycling and reject-on-miss
//! - **Announcements**: pure string formatting for sibling position,
//!   expansion state, and level changes, backend-agnostic
//!
//! The session layer that wires key events to these pieces lives in the
//! `trellis` crate.
//!
//! # Example
//!
//! ```
//! use trellis_core::{NavOutcome, NodeKind, Tree, TreeCursor};
//!
//! let mut tree = Tree::new();
//! let weapons = tree.add_root("Weapons", NodeKind::Group, true, ());
//! tree.add_child(weapons, "Rifle", NodeKind::Entry, false, ());
//! tree.add_root("Apparel", NodeKind::Group, true, ());
//!
//! let mut cursor = TreeCursor::new(&tree);
//! assert_eq!(cursor.expand_or_drill(&mut tree), NavOutcome::Expanded);
//! assert_eq!(cursor.visible().len(), 3);
//! ```

pub mod announce;
pub mod flatten;
pub mod logging;
pub mod navigator;
pub mod node;
pub mod typeahead;

pub use announce::{LevelTracker, announcement_for, describe_node, expansion_state, format_position};
pub use navigator::{NavOutcome, NavRejection, TreeCursor};
pub use node::{Node, NodeId, NodeKind, Tree};
pub use typeahead::{SearchOutcome, Typeahead};
