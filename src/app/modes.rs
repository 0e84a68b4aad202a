//! State machine enums for the view.
//!
//! # Load phase
//!
//! ```text
//! Loading ──fetch ok + decode ok──▶ Ready ⟲ (page / selection changes)
//!    │
//!    └──any fetch failure──▶ Failed (terminal for this view instance)
//! ```
//!
//! # Avatar status
//!
//! Each avatar URL moves from `Pending` to either `Loaded` or `Failed` once per
//! view instance. `Failed` selects the bundled placeholder image.

/// Where the view instance is in its load lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    /// The user-list request (or its decoding) is outstanding.
    ///
    /// Only the full-screen loading indicator is rendered.
    Loading,

    /// The fetch failed. Rendered as `Error loading data: {message}`.
    Failed {
        /// Display text of the [`RosterError`](crate::domain::RosterError).
        message: String,
    },

    /// Records are available; list and detail panels are rendered.
    Ready,
}

impl LoadPhase {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Load outcome of one avatar image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarStatus {
    /// Probe issued, no answer yet.
    Pending,
    /// The URL answered with a success status.
    Loaded,
    /// Malformed URL or failed probe; the placeholder is shown instead.
    Failed,
}
