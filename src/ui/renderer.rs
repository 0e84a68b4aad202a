//! Top-level rendering coordinator.
//!
//! Computes the view model for the current pane size and hands it to the
//! component for the current load phase.
//!
//! # Example
//!
//! ```rust
//! use rosterview::app::AppState;
//! use rosterview::ui::{render, Theme};
//!
//! let state = AppState::new(None, Theme::default());
//! let hits = render(&state, 24, 80); // Renders to stdout
//! assert!(hits.is_empty());
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::hitmap::HitMap;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::Screen;

/// Renders the plugin UI to stdout and returns the clickable regions drawn.
///
/// Does not clear the screen; the host clears the pane before each render.
pub fn render(state: &AppState, rows: usize, cols: usize) -> HitMap {
    let screen = state.compute_viewmodel(rows, cols);

    render_screen(&screen, &state.theme, rows, cols)
}

fn render_screen(screen: &Screen, theme: &Theme, rows: usize, cols: usize) -> HitMap {
    match screen {
        Screen::Loading(loading) => {
            components::render_loading(loading, theme, rows, cols);
            HitMap::default()
        }
        Screen::Failed(error) => {
            components::render_error(error, theme, rows, cols);
            HitMap::default()
        }
        Screen::Ready(view) => components::render_ready(view, theme, rows, cols),
    }
}
