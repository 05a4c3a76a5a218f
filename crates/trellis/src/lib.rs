//! Trellis: a keyboard-only, screen-reader-oriented navigation layer
//! for hierarchical menus inside mouse-driven applications.
//!
//! This crate is the session layer over [`trellis_core`]: it maps key
//! events onto the engine's tree/cursor/typeahead operations and hands
//! announcement text back to whatever narration channel the host has.
//! Each screen (inventory browser, editor tree, file picker, ...)
//! constructs one [`MenuSession`] when it opens and drops it when it
//! closes; the engine interprets no domain data and renders nothing.
//!
//! # Example
//!
//! ```
//! use trellis::{Key, KeyboardModifiers, MenuDelegate, MenuModel, MenuSession};
//! use trellis_core::{Node, NodeKind, Tree};
//!
//! struct Files(Vec<String>);
//!
//! impl MenuModel for Files {
//!     type Payload = usize;
//!
//!     fn build_tree(&self) -> Tree<usize> {
//!         let mut tree = Tree::new();
//!         for (i, name) in self.0.iter().enumerate() {
//!             tree.add_root(name.clone(), NodeKind::Entry, false, i);
//!         }
//!         tree
//!     }
//! }
//!
//! struct Opener;
//!
//! impl MenuDelegate<usize> for Opener {
//!     fn activate(&mut self, _kind: NodeKind, node: &Node<usize>) -> bool {
//!         println!("open file #{}", node.payload());
//!         true
//!     }
//! }
//!
//! let files = Files(vec!["colony-1.sav".into(), "colony-2.sav".into()]);
//! let mut session = MenuSession::new("load-game", files, Opener);
//! session.handle_key(Key::ArrowDown, KeyboardModifiers::NONE);
//! assert_eq!(session.current_selection().unwrap().label(), "colony-2.sav");
//! ```

pub mod adapter;
pub mod error;
pub mod events;
pub mod registry;
pub mod session;

pub use adapter::{MenuDelegate, MenuModel};
pub use error::SessionError;
pub use events::{Key, KeyResponse, KeyboardModifiers};
pub use registry::SessionRegistry;
pub use session::{Feedback, MenuSession};

pub use trellis_core;
