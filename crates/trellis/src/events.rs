//! Key and modifier types consumed by menu sessions.
//!
//! The host's input layer translates whatever physical events it
//! intercepts into these values. Printable characters do not appear
//! here: they travel through the separate
//! [`MenuSession::handle_character`](crate::session::MenuSession::handle_character)
//! channel.

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Check if no modifiers are pressed.
    pub fn none(&self) -> bool {
        !self.any()
    }
}

/// Named keys a menu session understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Up arrow: previous visible node.
    ArrowUp,
    /// Down arrow: next visible node.
    ArrowDown,
    /// Left arrow: collapse, or move to parent.
    ArrowLeft,
    /// Right arrow: expand, or drill into the first child.
    ArrowRight,
    /// Home: first sibling (absolute top with Ctrl).
    Home,
    /// End: last sibling (absolute bottom with Ctrl).
    End,
    /// Enter: toggle expansion, or activate a leaf.
    Enter,
    /// Escape: clear an active typeahead search.
    Escape,
    /// Backspace: shorten the typeahead query.
    Backspace,
    /// Delete: forwarded to the domain delegate.
    Delete,
}

/// Whether a session consumed an input event.
///
/// `NotHandled` tells the host to run its default handling for the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResponse {
    /// The event was consumed; suppress default handling.
    Handled,
    /// The event was not consumed.
    NotHandled,
}

impl KeyResponse {
    /// Whether the event was consumed.
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled)
    }
}
