//! Error types for the session layer.
//!
//! The engine itself has no fatal conditions: navigation and search
//! misses are ordinary outcomes. Errors only arise from misusing the
//! session registry.

use thiserror::Error;

/// Errors from [`SessionRegistry`](crate::registry::SessionRegistry)
/// lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A session is already open; only one menu may own input at a time.
    #[error("cannot open menu session `{requested}`: session `{open}` is already open")]
    AlreadyOpen {
        /// The context that was asked to open.
        requested: String,
        /// The context currently holding input.
        open: String,
    },

    /// The named session is not the open one (or nothing is open).
    #[error("menu session `{0}` is not open")]
    NotOpen(String),
}
