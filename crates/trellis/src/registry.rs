//! Bookkeeping for which menu session currently owns input.
//!
//! The source of this design kept a module-level singleton per screen;
//! here that becomes an explicit [`SessionRegistry`] value the host owns
//! (usually behind an `Arc`). Only one session may be open at a time:
//! input is delivered to exactly one menu, and opening a second one
//! while the first is still up is a host bug worth surfacing as an
//! error rather than silently stealing focus. Level tracking lives on
//! each [`MenuSession`](crate::session::MenuSession), so it starts
//! fresh whenever a session is constructed.

use parking_lot::Mutex;

use crate::error::SessionError;

/// Tracks the single open menu context.
///
/// All engine work is single-threaded by contract; the mutex exists so
/// the registry can be shared through host glue without `unsafe` or
/// `static mut`, not because of contention.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    open: Mutex<Option<String>>,
}

impl SessionRegistry {
    /// Creates a registry with no open session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `context` as the open session.
    ///
    /// Fails if any session (including `context` itself) is already
    /// open.
    pub fn open(&self, context: &str) -> Result<(), SessionError> {
        let mut open = self.open.lock();
        if let Some(open) = &*open {
            return Err(SessionError::AlreadyOpen {
                requested: context.to_string(),
                open: open.clone(),
            });
        }
        *open = Some(context.to_string());
        tracing::trace!(target: "trellis::registry", context, "session registered");
        Ok(())
    }

    /// Closes the open session.
    ///
    /// Fails if `context` is not the session currently open.
    pub fn close(&self, context: &str) -> Result<(), SessionError> {
        let mut open = self.open.lock();
        match &*open {
            Some(current) if current == context => {
                *open = None;
                Ok(())
            }
            _ => Err(SessionError::NotOpen(context.to_string())),
        }
    }

    /// The context of the open session, if any.
    pub fn current(&self) -> Option<String> {
        self.open.lock().clone()
    }

    /// Whether `context` is the open session.
    pub fn is_open(&self, context: &str) -> bool {
        self.open.lock().as_deref() == Some(context)
    }
}
