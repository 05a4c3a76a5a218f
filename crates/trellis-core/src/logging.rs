//! Logging facilities for Trellis.
//!
//! Trellis instruments itself with the `tracing` crate and never
//! installs a subscriber; the host application decides where (and
//! whether) engine logs go:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("trellis_core=trace")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Tree construction and mutation.
    pub const TREE: &str = "trellis_core::tree";
    /// Cursor navigation and expand/collapse.
    pub const NAVIGATOR: &str = "trellis_core::navigator";
    /// Typeahead search.
    pub const TYPEAHEAD: &str = "trellis_core::typeahead";
    /// Announcement formatting.
    pub const ANNOUNCE: &str = "trellis_core::announce";
}
