//! Shared rendering utilities and helpers.
//!
//! Panels are built as [`StyledLine`]s before anything is printed, so the
//! renderer can place them side by side or stack and scroll them. A line keeps
//! its ANSI text, its visible width and the clickable spans it contains.
//!
//! Widths count `char`s. Every glyph the UI draws (box drawing, `▸`, `●`) is
//! a single terminal cell.

use crate::ui::hitmap::HitTarget;
use crate::ui::theme::Theme;
use std::ops::Range;

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Visible width of plain text.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max` cells, ending in `...` when shortened.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text_width(text) <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let mut cut: String = text.chars().take(max - 3).collect();
    cut.push_str("...");
    cut
}

/// One line of composed output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledLine {
    /// Text with ANSI escapes, ready to print.
    pub rendered: String,
    /// Same text without escapes.
    pub plain: String,
    /// Cells occupied.
    pub width: usize,
    /// Clickable column spans, relative to the start of the line.
    pub hits: Vec<(Range<usize>, HitTarget)>,
}

impl StyledLine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends unstyled text.
    pub fn push(&mut self, text: &str) -> &mut Self {
        self.rendered.push_str(text);
        self.plain.push_str(text);
        self.width += text_width(text);
        self
    }

    /// Appends text wrapped in `style` and a reset.
    pub fn push_styled(&mut self, style: &str, text: &str) -> &mut Self {
        self.rendered.push_str(style);
        self.push(text);
        self.rendered.push_str(Theme::reset());
        self
    }

    /// Appends styled text and records it as clickable.
    pub fn push_hit(&mut self, style: &str, text: &str, target: HitTarget) -> &mut Self {
        let start = self.width;
        self.push_styled(style, text);
        self.hits.push((start..self.width, target));
        self
    }

    /// Pads with `style`d spaces up to `width` cells.
    pub fn fill_to(&mut self, width: usize, style: &str) -> &mut Self {
        let missing = width.saturating_sub(self.width);
        if missing > 0 {
            self.push_styled(style, &" ".repeat(missing));
        }
        self
    }

    /// Marks the whole current width as clickable.
    pub fn hit_all(&mut self, target: HitTarget) -> &mut Self {
        self.hits.push((0..self.width, target));
        self
    }

    /// Appends another line, shifting its hit spans.
    pub fn append(&mut self, other: &Self) -> &mut Self {
        let offset = self.width;
        self.rendered.push_str(&other.rendered);
        self.plain.push_str(&other.plain);
        self.width += other.width;
        self.hits.extend(
            other
                .hits
                .iter()
                .map(|(cols, target)| (cols.start + offset..cols.end + offset, *target)),
        );
        self
    }
}

/// Left padding that centers `len` cells in `cols`.
#[must_use]
pub const fn center_padding(len: usize, cols: usize) -> usize {
    cols.saturating_sub(len) / 2
}
