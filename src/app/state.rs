//! View state and view model computation.
//!
//! [`AppState`] is the single source of truth for one view instance: the
//! fetched records, the load phase, the current page, the selected record and
//! the per-avatar load outcomes. Terminal-specific state (row cursor, scroll
//! offset, viewport size) lives alongside it. The view model is computed on
//! demand from a state snapshot.
//!
//! # Example
//!
//! ```rust
//! use rosterview::app::AppState;
//! use rosterview::ui::theme::Theme;
//!
//! let state = AppState::new(Some("https://api.example.com/users".into()), Theme::default());
//! let screen = state.compute_viewmodel(24, 80);
//! ```

use super::lifetime::ViewLifetime;
use super::modes::{AvatarStatus, LoadPhase};
use super::pagination::Paginator;
use crate::domain::{display_or_placeholder, RosterError, UserRecord};
use crate::ui::layout::Layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    AvatarView, DetailField, DetailInfo, EmptyState, ErrorView, FooterInfo, HeaderInfo,
    LoadingView, PagerInfo, ReadyView, RowItem, Screen,
};
use std::collections::HashMap;
use std::ops::Range;

/// Delay between scroll animation steps.
pub const SCROLL_TICK_SECONDS: f64 = 0.03;

/// Smooth-scroll position of the content area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// First content line currently drawn.
    pub offset: usize,
    /// Line the animation is heading for.
    pub target: usize,
    /// A tick is scheduled with the host.
    pub animating: bool,
}

impl ScrollState {
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        self.offset == self.target
    }

    /// Moves half the remaining distance (at least one line) toward the target.
    ///
    /// Returns `true` if the offset changed.
    pub fn step(&mut self) -> bool {
        if self.is_settled() {
            self.animating = false;
            return false;
        }

        let stride = self.offset.abs_diff(self.target).div_ceil(2);
        if self.offset < self.target {
            self.offset += stride;
        } else {
            self.offset -= stride;
        }

        if self.is_settled() {
            self.animating = false;
        }
        true
    }
}

/// Whether an avatar URL is worth probing at all.
///
/// Anything that does not parse as an absolute http(s) URL fails immediately.
#[must_use]
pub fn is_loadable_avatar(url: &str) -> bool {
    url::Url::parse(url).is_ok_and(|u| matches!(u.scheme(), "http" | "https"))
}

/// State of one view instance plus the terminal state around it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Records in the order the endpoint returned them.
    pub records: Vec<UserRecord>,

    pub phase: LoadPhase,

    /// 1-based page index, always within `[1, max(total_pages, 1)]`.
    pub current_page: usize,

    /// Row under the keyboard cursor, relative to the current page.
    pub cursor: usize,

    /// Index into `records` of the record shown in the detail panel.
    ///
    /// Independent of pagination: survives page changes.
    pub selected: Option<usize>,

    /// Load outcome per avatar URL. URLs not present have not been probed.
    pub avatars: HashMap<String, AvatarStatus>,

    pub scroll: ScrollState,

    /// Last known pane size as `(rows, cols)`, refreshed on every render.
    pub viewport: (usize, usize),

    /// Cancellation token for in-flight requests.
    pub lifetime: ViewLifetime,

    /// Generation whose payload is with the worker and not yet answered.
    pub decoding: Option<u64>,

    /// User-list URL passed in from configuration.
    pub endpoint: Option<String>,

    /// Span filter directive, forwarded to the worker.
    pub trace_level: Option<String>,

    pub theme: Theme,
}

impl AppState {
    /// Creates an unmounted view with the given endpoint and theme.
    #[must_use]
    pub fn new(endpoint: Option<String>, theme: Theme) -> Self {
        Self {
            records: Vec::new(),
            phase: LoadPhase::Loading,
            current_page: 1,
            cursor: 0,
            selected: None,
            avatars: HashMap::new(),
            scroll: ScrollState::default(),
            viewport: (24, 80),
            lifetime: ViewLifetime::default(),
            decoding: None,
            endpoint,
            trace_level: None,
            theme,
        }
    }

    /// Discards everything owned by the view instance.
    ///
    /// Configuration, theme, viewport and the lifetime counter are kept.
    pub fn reset_view(&mut self) {
        self.records.clear();
        self.phase = LoadPhase::Loading;
        self.current_page = 1;
        self.cursor = 0;
        self.selected = None;
        self.avatars.clear();
        self.scroll = ScrollState::default();
        self.decoding = None;
    }

    /// Moves the view to the failed phase.
    pub fn fail(&mut self, error: &RosterError) {
        if error.is_fetch_failure() {
            tracing::warn!(error = %error, "user list failed to load");
        } else {
            tracing::warn!(error = %error, "view cannot fetch users");
        }
        self.phase = LoadPhase::Failed {
            message: error.to_string(),
        };
    }

    /// Installs fetched records and moves the view to the ready phase.
    pub fn load_records(&mut self, records: Vec<UserRecord>) {
        tracing::debug!(record_count = records.len(), "records loaded");
        self.records = records;
        self.phase = LoadPhase::Ready;
        self.current_page = 1;
        self.cursor = 0;
        self.selected = None;
    }

    #[must_use]
    pub const fn paginator(&self) -> Paginator {
        Paginator::new(self.records.len())
    }

    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.paginator().total_pages()
    }

    /// Index range of the current page into `records`.
    #[must_use]
    pub fn page_range(&self) -> Range<usize> {
        self.paginator().page_range(self.current_page)
    }

    /// Records shown on the current page.
    #[must_use]
    pub fn page_records(&self) -> &[UserRecord] {
        self.records.get(self.page_range()).unwrap_or_default()
    }

    /// Index into `records` of the row under the cursor.
    #[must_use]
    pub fn highlighted_index(&self) -> Option<usize> {
        let range = self.page_range();
        let index = range.start + self.cursor;
        range.contains(&index).then_some(index)
    }

    /// Moves the cursor down one row, wrapping to the top of the page.
    pub fn move_cursor_down(&mut self) {
        let len = self.page_range().len();
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % len;
    }

    /// Moves the cursor up one row, wrapping to the bottom of the page.
    pub fn move_cursor_up(&mut self) {
        let len = self.page_range().len();
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
    }

    /// Goes back one page. Returns `false` (no-op) on the first page.
    pub fn previous_page(&mut self) -> bool {
        if !self.paginator().can_go_back(self.current_page) {
            return false;
        }
        self.current_page -= 1;
        self.cursor = 0;
        true
    }

    /// Goes forward one page. Returns `false` (no-op) on the last page.
    pub fn next_page(&mut self) -> bool {
        if !self.paginator().can_go_forward(self.current_page) {
            return false;
        }
        self.current_page += 1;
        self.cursor = 0;
        true
    }

    /// Selects the record at `index` into `records`.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.records.len() {
            return false;
        }
        tracing::debug!(index, id = %self.records[index].id, "record selected");
        self.selected = Some(index);
        true
    }

    /// Moves the cursor to `page_offset` and selects that record.
    pub fn select_row(&mut self, page_offset: usize) -> Option<usize> {
        if page_offset >= self.page_range().len() {
            return None;
        }
        self.cursor = page_offset;
        let index = self.highlighted_index()?;
        self.select(index).then_some(index)
    }

    #[must_use]
    pub fn selected_record(&self) -> Option<&UserRecord> {
        self.selected.and_then(|i| self.records.get(i))
    }

    /// Load outcome for an avatar URL as the renderer should treat it.
    #[must_use]
    pub fn avatar_status(&self, url: &str) -> AvatarStatus {
        if !is_loadable_avatar(url) {
            return AvatarStatus::Failed;
        }
        self.avatars.get(url).copied().unwrap_or(AvatarStatus::Pending)
    }

    /// Marks avatars that just became visible as requested.
    ///
    /// Visible means on the current page or selected. Returns the URLs that
    /// need a probe; malformed URLs are failed on the spot and not returned.
    pub fn claim_visible_avatars(&mut self) -> Vec<String> {
        let mut visible: Vec<usize> = self.page_range().collect();
        visible.extend(self.selected);

        let mut to_probe = Vec::new();
        for index in visible {
            let Some(url) = self.records.get(index).map(|r| r.avatar.clone()) else {
                continue;
            };
            if self.avatars.contains_key(&url) {
                continue;
            }
            if is_loadable_avatar(&url) {
                self.avatars.insert(url.clone(), AvatarStatus::Pending);
                to_probe.push(url);
            } else {
                tracing::debug!(url = %url, "avatar url not loadable, using placeholder");
                self.avatars.insert(url, AvatarStatus::Failed);
            }
        }
        to_probe
    }

    /// Records a probe result. Returns `true` if the status changed.
    pub fn record_avatar_result(&mut self, url: &str, loaded: bool) -> bool {
        match self.avatars.get_mut(url) {
            Some(status @ AvatarStatus::Pending) => {
                *status = if loaded {
                    AvatarStatus::Loaded
                } else {
                    AvatarStatus::Failed
                };
                true
            }
            _ => false,
        }
    }

    /// Geometry for the last known viewport.
    #[must_use]
    pub fn layout(&self) -> Layout {
        let (rows, cols) = self.viewport;
        Layout::compute(rows, cols, self.page_range().len(), self.selected.is_some())
    }

    /// Stores the pane size and keeps the scroll position inside the new bounds.
    pub fn set_viewport(&mut self, rows: usize, cols: usize) {
        self.viewport = (rows, cols);
        let max = self.layout().max_scroll();
        self.scroll.offset = self.scroll.offset.min(max);
        self.scroll.target = self.scroll.target.min(max);
    }

    /// Points the scroll animation at `target`.
    ///
    /// Returns `true` when a new tick has to be scheduled.
    fn scroll_to(&mut self, target: usize) -> bool {
        self.scroll.target = target.min(self.layout().max_scroll());
        if self.scroll.is_settled() {
            self.scroll.animating = false;
            return false;
        }
        if self.scroll.animating {
            return false;
        }
        self.scroll.animating = true;
        true
    }

    /// Starts scrolling the detail panel into view.
    pub fn scroll_detail_into_view(&mut self) -> bool {
        let target = self.layout().detail_scroll_target();
        self.scroll_to(target)
    }

    /// Starts scrolling back to the top of the list.
    pub fn scroll_list_into_view(&mut self) -> bool {
        self.scroll_to(0)
    }

    /// Advances the scroll animation one step. Returns `true` if the offset moved.
    pub fn advance_scroll(&mut self) -> bool {
        self.scroll.target = self.scroll.target.min(self.layout().max_scroll());
        self.scroll.step()
    }

    /// Scrolls by `delta` lines immediately, cancelling any animation.
    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.layout().max_scroll();
        let offset = self.scroll.offset.saturating_add_signed(delta).min(max);
        self.scroll = ScrollState {
            offset,
            target: offset,
            animating: false,
        };
    }

    /// Computes the renderable screen for a pane of `rows` x `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> Screen {
        match &self.phase {
            LoadPhase::Loading => Screen::Loading(LoadingView {
                message: "Loading...".to_string(),
            }),
            LoadPhase::Failed { message } => Screen::Failed(ErrorView {
                message: format!("Error loading data: {message}"),
                footer: FooterInfo {
                    keybindings: "r: reload  q: quit".to_string(),
                },
            }),
            LoadPhase::Ready => Screen::Ready(self.compute_ready_view(rows, cols)),
        }
    }

    fn compute_ready_view(&self, rows: usize, cols: usize) -> ReadyView {
        let range = self.page_range();
        let layout = Layout::compute(rows, cols, range.len(), self.selected.is_some());
        let paginator = self.paginator();

        let rows: Vec<RowItem> = range
            .clone()
            .enumerate()
            .filter_map(|(offset, index)| {
                self.records.get(index).map(|record| RowItem {
                    page_offset: offset,
                    name: record.full_name(),
                    job_title: record.job_title.clone().unwrap_or_default(),
                    avatar: self.avatar_view(record),
                    is_cursor: offset == self.cursor,
                    is_selected: self.selected == Some(index),
                })
            })
            .collect();

        let empty_state = self.records.is_empty().then(|| EmptyState {
            message: "No users to display".to_string(),
        });

        ReadyView {
            header: HeaderInfo {
                title: "Users List".to_string(),
            },
            rows,
            pager: PagerInfo {
                current_page: self.current_page,
                total_pages: paginator.total_pages(),
                can_go_back: paginator.can_go_back(self.current_page),
                can_go_forward: paginator.can_go_forward(self.current_page),
            },
            detail: self.selected_record().map(|record| self.detail_info(record)),
            empty_state,
            footer: FooterInfo {
                keybindings: "j/k: move  Enter: view  h/l: page  r: reload  q: quit".to_string(),
            },
            layout,
            scroll_offset: self.scroll.offset.min(layout.max_scroll()),
        }
    }

    fn avatar_view(&self, record: &UserRecord) -> AvatarView {
        AvatarView {
            initials: record.initials(),
            status: self.avatar_status(&record.avatar),
        }
    }

    fn detail_info(&self, record: &UserRecord) -> DetailInfo {
        let field = |label: &'static str, value: Option<&str>| {
            let shown = display_or_placeholder(value);
            DetailField {
                label,
                value: shown.to_string(),
                is_placeholder: value.map_or(true, |v| v.trim().is_empty()),
            }
        };

        let full_name = record.full_name();

        DetailInfo {
            name: display_or_placeholder(Some(&full_name)).to_string(),
            avatar: self.avatar_view(record),
            fields: vec![
                field("Username:", record.profile.username.as_deref()),
                field("Job Title:", record.job_title.as_deref()),
                field("Bio:", record.bio.as_deref()),
                field("Email:", record.profile.email.as_deref()),
            ],
        }
    }
}
