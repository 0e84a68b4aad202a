//! Screen geometry for the master/detail layout.
//!
//! On wide panes the list and the detail panel sit side by side. Below
//! [`WIDE_LAYOUT_MIN_COLS`] they stack vertically, list first, and the content
//! can grow taller than the pane; the scroll offset then decides which content
//! lines are visible. Panel heights are fixed functions of the page length so
//! the event handler can compute scroll targets without rendering.
//!
//! ```text
//! Wide                               Stacked
//! ┌──────────────┬──────────────┐    ┌──────────────┐
//! │ list panel   │ detail panel │    │ list panel   │
//! │              │              │    ├──────────────┤  ← detail_start
//! └──────────────┴──────────────┘    │ detail panel │
//!                                    └──────────────┘
//! ```

/// Minimum pane width for the side-by-side layout.
pub const WIDE_LAYOUT_MIN_COLS: usize = 100;

/// Rows reserved around the content area: top blank row, footer border, footer.
pub const CHROME_ROWS: usize = 3;

/// Height of an avatar block (placeholder art or initials box).
pub const AVATAR_HEIGHT: usize = 5;

/// Width of an avatar block.
pub const AVATAR_WIDTH: usize = 10;

/// Title line plus the border under it.
pub const LIST_HEADER_LINES: usize = 2;

/// Name line, job title line and separator for each record.
pub const LINES_PER_ROW: usize = 3;

/// Blank spacer plus the pager controls.
pub const PAGER_LINES: usize = 2;

/// Avatar, spacer, name, spacer, then username, job title, bio and email.
pub const DETAIL_PANEL_LINES: usize = AVATAR_HEIGHT + 3 + 4;

/// How the two panels share the pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// List on the left half, detail on the right half.
    Wide,
    /// List above detail, both full width.
    Stacked,
}

/// Number of content lines the list panel occupies for a page of `page_len` rows.
///
/// An empty record set still takes one line for its empty-state message.
#[must_use]
pub const fn list_panel_lines(page_len: usize) -> usize {
    let rows = if page_len == 0 { 1 } else { page_len * LINES_PER_ROW };
    LIST_HEADER_LINES + rows + PAGER_LINES
}

/// Resolved geometry for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub mode: LayoutMode,
    /// Content rows visible between the chrome rows.
    pub viewport_rows: usize,
    pub list_width: usize,
    pub detail_width: usize,
    pub list_lines: usize,
    /// Zero when nothing is selected.
    pub detail_lines: usize,
}

impl Layout {
    /// Computes the geometry for a pane of `rows` x `cols`.
    #[must_use]
    pub fn compute(rows: usize, cols: usize, page_len: usize, has_selection: bool) -> Self {
        let mode = if cols >= WIDE_LAYOUT_MIN_COLS {
            LayoutMode::Wide
        } else {
            LayoutMode::Stacked
        };

        let (list_width, detail_width) = match mode {
            LayoutMode::Wide => (cols / 2, cols - cols / 2),
            LayoutMode::Stacked => (cols, cols),
        };

        Self {
            mode,
            viewport_rows: rows.saturating_sub(CHROME_ROWS),
            list_width,
            detail_width,
            list_lines: list_panel_lines(page_len),
            detail_lines: if has_selection { DETAIL_PANEL_LINES } else { 0 },
        }
    }

    /// Total content lines after composing both panels.
    #[must_use]
    pub fn content_lines(&self) -> usize {
        match self.mode {
            LayoutMode::Wide => self.list_lines.max(self.detail_lines),
            LayoutMode::Stacked => self.list_lines + self.detail_lines,
        }
    }

    /// Largest scroll offset that still fills the viewport.
    #[must_use]
    pub fn max_scroll(&self) -> usize {
        self.content_lines().saturating_sub(self.viewport_rows)
    }

    /// Content line where the detail panel begins.
    #[must_use]
    pub const fn detail_start(&self) -> usize {
        match self.mode {
            LayoutMode::Wide => 0,
            LayoutMode::Stacked => self.list_lines,
        }
    }

    /// Offset that brings the detail panel into view, as far as content allows.
    #[must_use]
    pub fn detail_scroll_target(&self) -> usize {
        self.detail_start().min(self.max_scroll())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_switches_mode() {
        assert_eq!(Layout::compute(40, 99, 4, true).mode, LayoutMode::Stacked);
        assert_eq!(Layout::compute(40, 100, 4, true).mode, LayoutMode::Wide);
    }

    #[test]
    fn wide_halves_cover_the_pane() {
        let layout = Layout::compute(40, 121, 4, true);
        assert_eq!(layout.list_width + layout.detail_width, 121);
    }

    #[test]
    fn wide_layout_never_scrolls_to_detail() {
        let layout = Layout::compute(10, 120, 4, true);
        assert_eq!(layout.detail_start(), 0);
        assert_eq!(layout.detail_scroll_target(), 0);
    }

    #[test]
    fn stacked_target_is_detail_start_when_content_allows() {
        // 4 rows: 2 + 12 + 2 = 16 list lines, 12 detail lines, 28 total.
        let layout = Layout::compute(20, 80, 4, true);
        assert_eq!(layout.list_lines, 16);
        assert_eq!(layout.viewport_rows, 17);
        assert_eq!(layout.max_scroll(), 11);
        assert_eq!(layout.detail_scroll_target(), 11);

        let short = Layout::compute(8, 80, 4, true);
        assert_eq!(short.detail_scroll_target(), 16);
    }

    #[test]
    fn tall_pane_needs_no_scroll() {
        let layout = Layout::compute(60, 80, 4, true);
        assert_eq!(layout.max_scroll(), 0);
        assert_eq!(layout.detail_scroll_target(), 0);
    }

    #[test]
    fn empty_page_still_has_message_line() {
        assert_eq!(list_panel_lines(0), 5);
        assert_eq!(list_panel_lines(1), 7);
    }
}
