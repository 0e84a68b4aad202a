//! Detail panel for the selected record.
//!
//! ```text
//!   ╭────────╮
//!   │        │
//!   │   AL   │
//!   │        │
//!   ╰────────╯
//!
//!   Ada Lovelace
//!
//!   Username:  ada
//!   Job Title: Analyst
//!   Bio:       No data to display
//!   Email:     ada@example.com
//! ```

use crate::ui::avatar::avatar_block;
use crate::ui::helpers::{truncate, StyledLine};
use crate::ui::layout::DETAIL_PANEL_LINES;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailField, DetailInfo};

const MARGIN: &str = "  ";
const LABEL_WIDTH: usize = 11;

fn field_line(field: &DetailField, theme: &Theme, width: usize) -> StyledLine {
    let value_style = if field.is_placeholder {
        format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.placeholder_fg))
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    let value_width = width.saturating_sub(MARGIN.len() + LABEL_WIDTH);

    let mut line = StyledLine::new();
    line.push(MARGIN);
    line.push_styled(
        &Theme::fg(&theme.colors.accent),
        &format!("{:<width$}", field.label, width = LABEL_WIDTH),
    );
    line.push_styled(&value_style, &truncate(&field.value, value_width));
    line
}

/// Composes the detail panel; always [`DETAIL_PANEL_LINES`] lines.
#[must_use]
pub fn detail_panel(detail: &DetailInfo, theme: &Theme, width: usize) -> Vec<StyledLine> {
    let mut lines = Vec::with_capacity(DETAIL_PANEL_LINES);

    for block_line in avatar_block(&detail.avatar, theme) {
        let mut line = StyledLine::new();
        line.push(MARGIN).append(&block_line);
        lines.push(line);
    }

    lines.push(StyledLine::new());

    let mut name = StyledLine::new();
    name.push(MARGIN).push_styled(
        &format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg)),
        &truncate(&detail.name, width.saturating_sub(MARGIN.len())),
    );
    lines.push(name);

    lines.push(StyledLine::new());

    lines.extend(detail.fields.iter().map(|f| field_line(f, theme, width)));
    lines
}
