//! Pager controls under the list.
//!
//! ```text
//!  Page 1 of 2                  <   1   >
//! ```

use crate::ui::helpers::{text_width, StyledLine};
use crate::ui::hitmap::HitTarget;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PagerInfo;

fn button(line: &mut StyledLine, label: &str, enabled: bool, target: HitTarget, theme: &Theme) {
    let text = format!(" {label} ");
    if enabled {
        let style = Theme::fg_bg(&theme.colors.button_fg, &theme.colors.button_bg);
        line.push_hit(&style, &text, target);
    } else {
        let style = Theme::fg_bg(&theme.colors.button_disabled_fg, &theme.colors.button_disabled_bg);
        line.push_styled(&style, &text);
    }
}

/// Page summary on the left, previous/current/next controls on the right.
///
/// Disabled controls are drawn in the disabled colors and are not clickable.
#[must_use]
pub fn pager_line(pager: &PagerInfo, theme: &Theme, width: usize) -> StyledLine {
    let summary = if pager.total_pages == 0 {
        String::new()
    } else {
        format!(" Page {} of {}", pager.current_page, pager.total_pages)
    };
    let current = format!(" {} ", pager.current_page);
    let controls_width = 3 + 1 + text_width(&current) + 1 + 3 + 1;

    let mut line = StyledLine::new();
    line.push_styled(&Theme::fg(&theme.colors.text_dim), &summary);
    line.fill_to(width.saturating_sub(controls_width), "");

    button(&mut line, "<", pager.can_go_back, HitTarget::PreviousPage, theme);
    line.push(" ");
    line.push_styled(&format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent)), &current);
    line.push(" ");
    button(&mut line, ">", pager.can_go_forward, HitTarget::NextPage, theme);
    line.fill_to(width, "");
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn info(current_page: usize, total_pages: usize) -> PagerInfo {
        PagerInfo {
            current_page,
            total_pages,
            can_go_back: current_page > 1,
            can_go_forward: current_page < total_pages,
        }
    }

    fn targets(line: &StyledLine) -> Vec<HitTarget> {
        line.hits.iter().map(|(_, t)| *t).collect()
    }

    #[rstest]
    #[case(info(1, 2), vec![HitTarget::NextPage])]
    #[case(info(2, 2), vec![HitTarget::PreviousPage])]
    #[case(info(2, 3), vec![HitTarget::PreviousPage, HitTarget::NextPage])]
    #[case(info(1, 0), vec![])]
    fn only_enabled_controls_are_clickable(#[case] pager: PagerInfo, #[case] expected: Vec<HitTarget>) {
        let line = pager_line(&pager, &Theme::default(), 50);
        assert_eq!(targets(&line), expected);
        assert_eq!(line.width, 50);
    }

    #[test]
    fn summary_and_controls_share_the_line() {
        let line = pager_line(&info(2, 3), &Theme::default(), 50);
        assert!(line.plain.starts_with(" Page 2 of 3"));
        assert!(line.plain.ends_with(" <   2   >  "));
    }
}
