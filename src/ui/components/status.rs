//! Full-screen loading indicator and inline error message.

use super::render_border;
use super::footer::render_footer;
use crate::ui::helpers::{center_padding, position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ErrorView, LoadingView};

/// Draws only the loading message, centered in the pane.
pub fn render_loading(view: &LoadingView, theme: &Theme, rows: usize, cols: usize) {
    let message = truncate(&view.message, cols);
    let padding = center_padding(text_width(&message), cols);

    position_cursor((rows / 2).max(1), 1);
    print!("{}", " ".repeat(padding));
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.loading_fg));
    print!("{message}");
    print!("{}", Theme::reset());
}

/// Draws the error message at the top of the pane and the reduced footer.
///
/// Long messages wrap onto following rows.
pub fn render_error(view: &ErrorView, theme: &Theme, rows: usize, cols: usize) {
    let footer_row = rows;
    let last_message_row = footer_row.saturating_sub(2);
    let width = cols.saturating_sub(2).max(1);

    let chars: Vec<char> = view.message.chars().collect();
    for (i, chunk) in chars.chunks(width).enumerate() {
        let row = 2 + i;
        if row > last_message_row {
            break;
        }
        position_cursor(row, 1);
        print!(" {}", Theme::fg(&theme.colors.error_fg));
        print!("{}", chunk.iter().collect::<String>());
        print!("{}", Theme::reset());
    }

    if footer_row > 2 {
        render_border(footer_row - 1, &theme.colors.border, cols);
        render_footer(footer_row, &view.footer, theme, cols);
    }
}
