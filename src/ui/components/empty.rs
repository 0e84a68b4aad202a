//! Empty list message.

use crate::ui::helpers::{center_padding, text_width, truncate, StyledLine};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Centered message shown in place of rows when the endpoint returned none.
#[must_use]
pub fn empty_state_line(empty: &EmptyState, theme: &Theme, width: usize) -> StyledLine {
    let message = truncate(&empty.message, width);
    let mut line = StyledLine::new();
    line.push(&" ".repeat(center_padding(text_width(&message), width)));
    line.push_styled(&Theme::fg(&theme.colors.empty_state_fg), &message);
    line.fill_to(width, "");
    line
}
