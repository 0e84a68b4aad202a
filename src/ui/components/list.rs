//! List panel: title, one block per record on the page, pager.
//!
//! ```text
//!  Users List
//! ────────────────────────────────────────
//! ▸ (AL) Ada Lovelace ●
//!        Analyst
//!   ──────────────────────────────────────
//!   (··) Grace Hopper
//!        Rear Admiral
//!   ──────────────────────────────────────
//!
//!  Page 1 of 2                 <   1   >
//! ```
//!
//! The number of lines always equals [`list_panel_lines`] for the page length.

use super::empty::empty_state_line;
use super::header::header_line;
use super::pager::pager_line;
use crate::ui::avatar::{badge_text, push_badge};
use crate::ui::helpers::{truncate, StyledLine};
use crate::ui::hitmap::HitTarget;
use crate::ui::layout::list_panel_lines;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ReadyView, RowItem};

const CURSOR_MARKER: &str = "▸ ";
const SELECTED_MARKER: &str = " ●";
/// Marker, badge and the space after it.
const TEXT_INDENT: usize = 7;

fn row_lines(row: &RowItem, theme: &Theme, width: usize) -> [StyledLine; 3] {
    let (base, cursor_marker) = if row.is_cursor {
        (Theme::fg_bg(&theme.colors.selection_fg, &theme.colors.selection_bg), CURSOR_MARKER)
    } else {
        (Theme::fg(&theme.colors.text_normal), "  ")
    };
    let name_width = width.saturating_sub(TEXT_INDENT + SELECTED_MARKER.chars().count());

    let mut name = StyledLine::new();
    name.push_styled(&base, cursor_marker);
    if row.is_cursor {
        name.push_styled(&base, &badge_text(&row.avatar));
    } else {
        push_badge(&mut name, &row.avatar, theme);
    }
    name.push_styled(&base, " ");
    name.push_styled(&format!("{base}{}", Theme::bold()), &truncate(&row.name, name_width));
    if row.is_selected {
        name.push_styled(&format!("{base}{}", Theme::fg(&theme.colors.accent)), SELECTED_MARKER);
    }
    name.fill_to(width, &base);
    name.hit_all(HitTarget::Row(row.page_offset));

    let job_style = if row.is_cursor {
        base.clone()
    } else {
        format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim))
    };
    let mut job = StyledLine::new();
    job.push_styled(&base, &" ".repeat(TEXT_INDENT));
    job.push_styled(&job_style, &truncate(&row.job_title, width.saturating_sub(TEXT_INDENT)));
    job.fill_to(width, &base);
    job.hit_all(HitTarget::Row(row.page_offset));

    let mut separator = StyledLine::new();
    separator.push("  ");
    separator.push_styled(&Theme::fg(&theme.colors.border), &"─".repeat(width.saturating_sub(2)));

    [name, job, separator]
}

/// Composes the list panel for a ready view at `width` cells.
#[must_use]
pub fn list_panel(view: &ReadyView, theme: &Theme, width: usize) -> Vec<StyledLine> {
    let mut lines = Vec::with_capacity(list_panel_lines(view.rows.len()));

    lines.push(header_line(&view.header, theme, width));

    let mut border = StyledLine::new();
    border.push_styled(&Theme::fg(&theme.colors.border), &"─".repeat(width));
    lines.push(border);

    match &view.empty_state {
        Some(empty) if view.rows.is_empty() => lines.push(empty_state_line(empty, theme, width)),
        _ if view.rows.is_empty() => lines.push(StyledLine::new()),
        _ => {
            for row in &view.rows {
                lines.extend(row_lines(row, theme, width));
            }
        }
    }

    lines.push(StyledLine::new());
    lines.push(pager_line(&view.pager, theme, width));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AvatarStatus;
    use crate::ui::layout::Layout;
    use crate::ui::viewmodel::{AvatarView, EmptyState, FooterInfo, HeaderInfo, PagerInfo};
    use rstest::rstest;

    fn row(offset: usize, name: &str) -> RowItem {
        RowItem {
            page_offset: offset,
            name: name.to_string(),
            job_title: "Engineer".to_string(),
            avatar: AvatarView {
                initials: "AB".to_string(),
                status: AvatarStatus::Pending,
            },
            is_cursor: offset == 0,
            is_selected: false,
        }
    }

    fn view(rows: Vec<RowItem>) -> ReadyView {
        let empty_state = rows.is_empty().then(|| EmptyState {
            message: "No users to display".to_string(),
        });
        ReadyView {
            header: HeaderInfo {
                title: "Users List".to_string(),
            },
            layout: Layout::compute(24, 80, rows.len(), false),
            rows,
            pager: PagerInfo {
                current_page: 1,
                total_pages: 1,
                can_go_back: false,
                can_go_forward: false,
            },
            detail: None,
            empty_state,
            footer: FooterInfo {
                keybindings: String::new(),
            },
            scroll_offset: 0,
        }
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(4)]
    fn line_count_matches_layout(#[case] count: usize) {
        let rows = (0..count).map(|i| row(i, "Ada Lovelace")).collect();
        let lines = list_panel(&view(rows), &Theme::default(), 40);
        assert_eq!(lines.len(), list_panel_lines(count));
    }

    #[test]
    fn rows_are_clickable_and_marked() {
        let mut rows = vec![row(0, "Ada Lovelace"), row(1, "Grace Hopper")];
        rows[1].is_selected = true;
        let lines = list_panel(&view(rows), &Theme::default(), 40);

        assert!(lines[2].plain.starts_with("▸ (AB) Ada Lovelace"));
        assert!(lines[5].plain.starts_with("  (AB) Grace Hopper ●"));
        assert_eq!(lines[6].hits, vec![(0..40, HitTarget::Row(1))]);
        assert!(lines[7].hits.is_empty());
    }

    #[test]
    fn long_names_are_truncated_to_width() {
        let lines = list_panel(
            &view(vec![row(0, "Bartholomew Fitzgerald-Worthington the Third")]),
            &Theme::default(),
            30,
        );
        assert_eq!(lines[2].width, 30);
        assert!(lines[2].plain.contains("..."));
    }

    #[test]
    fn empty_list_shows_message() {
        let lines = list_panel(&view(Vec::new()), &Theme::default(), 40);
        assert!(lines[2].plain.contains("No users to display"));
    }
}
