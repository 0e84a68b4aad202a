//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: List title line
//! - [`list`]: Rows of the current page plus pager
//! - [`pager`]: Previous / current / next controls
//! - [`detail`]: Avatar and fields of the selected record
//! - [`empty`]: Message for an empty record set
//! - [`status`]: Loading indicator and error message
//! - [`footer`]: Help text and keybinding hints
//!
//! Panels return [`StyledLine`]s. [`compose`] arranges them for the layout
//! mode and [`render_ready`] prints the visible window of the result between
//! the top blank row and the footer.
//!
//! ```text
//! [blank line]
//! [content lines from scroll_offset, viewport_rows of them]
//! [Border]
//! [Footer]
//! ```

mod detail;
mod empty;
mod footer;
mod header;
mod list;
mod pager;
mod status;

pub use detail::detail_panel;
pub use header::header_line;
pub use list::list_panel;
pub use status::{render_error, render_loading};

use crate::ui::helpers::{position_cursor, StyledLine};
use crate::ui::hitmap::{HitMap, HitRegion};
use crate::ui::layout::LayoutMode;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ReadyView;
use footer::render_footer;

/// 1-indexed screen row of the first content line.
const CONTENT_TOP_ROW: usize = 2;

/// Renders a horizontal border line at `row` (1-indexed) and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Arranges list and detail panels into full-width content lines.
///
/// Returns exactly `view.layout.content_lines()` lines.
#[must_use]
pub fn compose(view: &ReadyView, theme: &Theme) -> Vec<StyledLine> {
    let layout = view.layout;
    let detail = view
        .detail
        .as_ref()
        .map(|d| detail_panel(d, theme, layout.detail_width))
        .unwrap_or_default();

    match layout.mode {
        LayoutMode::Stacked => {
            let mut lines = list_panel(view, theme, layout.list_width);
            lines.extend(detail);
            lines
        }
        LayoutMode::Wide => {
            let left_width = layout.list_width.saturating_sub(1);
            let list = list_panel(view, theme, left_width);

            let mut hint = StyledLine::new();
            if view.detail.is_none() {
                hint.push_styled(
                    &format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim)),
                    "  Select a user to view details",
                );
            }
            let right = if detail.is_empty() { vec![hint] } else { detail };

            let divider = Theme::fg(&theme.colors.border);
            (0..layout.content_lines())
                .map(|i| {
                    let mut line = list.get(i).cloned().unwrap_or_default();
                    line.fill_to(left_width, "");
                    line.push_styled(&divider, "│");
                    if let Some(r) = right.get(i) {
                        line.append(r);
                    }
                    line
                })
                .collect()
        }
    }
}

/// Hit regions of the lines visible at `scroll_offset`.
#[must_use]
pub fn collect_hits(lines: &[StyledLine], scroll_offset: usize, viewport_rows: usize) -> HitMap {
    let mut map = HitMap::default();
    for (i, line) in lines.iter().skip(scroll_offset).take(viewport_rows).enumerate() {
        for (cols, target) in &line.hits {
            map.push(HitRegion {
                row: CONTENT_TOP_ROW - 1 + i,
                cols: cols.clone(),
                target: *target,
            });
        }
    }
    map
}

/// Prints the ready view and returns where its clickable regions landed.
pub fn render_ready(view: &ReadyView, theme: &Theme, rows: usize, cols: usize) -> HitMap {
    let lines = compose(view, theme);
    let viewport = view.layout.viewport_rows;

    for (i, line) in lines.iter().skip(view.scroll_offset).take(viewport).enumerate() {
        position_cursor(CONTENT_TOP_ROW + i, 1);
        print!("{}{}", line.rendered, Theme::reset());
    }

    if rows > CONTENT_TOP_ROW {
        render_border(rows - 1, &theme.colors.border, cols);
        render_footer(rows, &view.footer, theme, cols);
    }

    collect_hits(&lines, view.scroll_offset, viewport)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::domain::{Profile, UserId, UserRecord};
    use crate::ui::hitmap::HitTarget;
    use crate::ui::viewmodel::Screen;
    use rstest::rstest;

    fn state_with(count: u64) -> AppState {
        let mut state = AppState::new(None, Theme::default());
        state.load_records(
            (1..=count)
                .map(|id| UserRecord {
                    id: UserId::Number(id),
                    avatar: String::new(),
                    profile: Profile {
                        first_name: format!("User{id}"),
                        last_name: String::new(),
                        username: None,
                        email: None,
                    },
                    job_title: None,
                    bio: None,
                })
                .collect(),
        );
        state
    }

    fn ready(state: &AppState, rows: usize, cols: usize) -> ReadyView {
        match state.compute_viewmodel(rows, cols) {
            Screen::Ready(view) => view,
            _ => panic!("expected ready screen"),
        }
    }

    #[rstest]
    #[case(40, 120)]
    #[case(40, 80)]
    #[case(10, 80)]
    fn composed_height_matches_layout(#[case] rows: usize, #[case] cols: usize) {
        let mut state = state_with(5);
        state.select(0);
        let view = ready(&state, rows, cols);

        assert_eq!(compose(&view, &Theme::default()).len(), view.layout.content_lines());
    }

    #[test]
    fn wide_lines_fill_the_pane() {
        let mut state = state_with(3);
        state.select(1);
        let view = ready(&state, 40, 120);
        let lines = compose(&view, &Theme::default());

        assert!(lines[0].plain.contains('│'));
        assert!(lines.iter().all(|l| l.width <= 120));
    }

    #[test]
    fn hits_follow_scroll_offset() {
        let state = state_with(4);
        let view = ready(&state, 40, 80);
        let lines = compose(&view, &Theme::default());

        let top = collect_hits(&lines, 0, 30);
        // Title and border come first; the first row starts at content line 2.
        assert_eq!(top.target_at(3, 5), Some(HitTarget::Row(0)));

        let scrolled = collect_hits(&lines, 2, 30);
        assert_eq!(scrolled.target_at(1, 5), Some(HitTarget::Row(0)));
    }

    #[test]
    fn hits_outside_viewport_are_dropped() {
        let state = state_with(4);
        let view = ready(&state, 40, 80);
        let lines = compose(&view, &Theme::default());

        let map = collect_hits(&lines, 0, 2);
        assert!(map.is_empty());
    }
}
