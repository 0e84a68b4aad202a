//! View model types representing renderable UI state.
//!
//! View models are created by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready strings and flags only; placeholder
//! substitution, pagination and avatar fallback have already been decided.

use crate::app::modes::AvatarStatus;
use crate::ui::layout::Layout;

/// What the whole pane shows for the current load phase.
#[derive(Debug, Clone)]
pub enum Screen {
    /// Full-screen loading indicator; nothing else is drawn.
    Loading(LoadingView),
    /// Inline error message built from the failure description.
    Failed(ErrorView),
    /// List and detail panels.
    Ready(ReadyView),
}

#[derive(Debug, Clone)]
pub struct LoadingView {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ErrorView {
    /// Complete message, e.g. `Error loading data: Request failed with status code 500`.
    pub message: String,
    pub footer: FooterInfo,
}

/// Everything drawn once records are available.
#[derive(Debug, Clone)]
pub struct ReadyView {
    pub header: HeaderInfo,
    /// Records of the current page, in order.
    pub rows: Vec<RowItem>,
    pub pager: PagerInfo,
    /// Present when a record is selected.
    pub detail: Option<DetailInfo>,
    /// Shown in place of rows when the endpoint returned no records.
    pub empty_state: Option<EmptyState>,
    pub footer: FooterInfo,
    pub layout: Layout,
    /// First content line drawn, already clamped to the layout.
    pub scroll_offset: usize,
}

/// One record in the list panel.
#[derive(Debug, Clone)]
pub struct RowItem {
    /// Position on the current page, used for mouse hit targets.
    pub page_offset: usize,
    pub name: String,
    /// Shown as given; empty when the record has none.
    pub job_title: String,
    pub avatar: AvatarView,
    /// Row under the keyboard cursor.
    pub is_cursor: bool,
    /// Record currently shown in the detail panel.
    pub is_selected: bool,
}

/// Avatar as it should be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarView {
    pub initials: String,
    pub status: AvatarStatus,
}

impl AvatarView {
    /// Whether the bundled placeholder replaces the remote image.
    #[must_use]
    pub fn shows_placeholder(&self) -> bool {
        self.status == AvatarStatus::Failed
    }
}

/// Pager controls under the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

/// Detail panel for the selected record.
#[derive(Debug, Clone)]
pub struct DetailInfo {
    pub name: String,
    pub avatar: AvatarView,
    /// Username, job title, bio and email, in that order.
    pub fields: Vec<DetailField>,
}

impl DetailInfo {
    /// Looks up a field by its label.
    #[must_use]
    pub fn field(&self, label: &str) -> Option<&DetailField> {
        self.fields.iter().find(|f| f.label == label)
    }
}

/// One labelled value in the detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    /// The record's value, or the no-data placeholder text.
    pub value: String,
    pub is_placeholder: bool,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Message shown inside the list panel when there are no records.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
}
