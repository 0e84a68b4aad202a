//! List title component.

use crate::ui::helpers::StyledLine;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Title line of the list panel, padded to `width` with the header colors.
///
/// # Example
///
/// ```rust
/// use rosterview::ui::components::header_line;
/// use rosterview::ui::viewmodel::HeaderInfo;
/// use rosterview::ui::Theme;
///
/// let header = HeaderInfo { title: "Users List".to_string() };
/// let line = header_line(&header, &Theme::default(), 40);
/// assert_eq!(line.width, 40);
/// ```
#[must_use]
pub fn header_line(header: &HeaderInfo, theme: &Theme, width: usize) -> StyledLine {
    let mut style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        style.push_str(&Theme::bg(bg));
    }

    let mut line = StyledLine::new();
    line.push_styled(&style, &format!(" {}", header.title));
    line.fill_to(width, &style);
    line
}
