//! Avatar blocks and badges.
//!
//! A terminal cannot show the remote image, so a loaded (or still pending)
//! avatar is drawn as an initials box. A failed avatar is replaced by the
//! bundled placeholder art.

use crate::app::AvatarStatus;
use crate::ui::helpers::{text_width, StyledLine};
use crate::ui::layout::{AVATAR_HEIGHT, AVATAR_WIDTH};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::AvatarView;

const PLACEHOLDER_ART: &str = include_str!("../../assets/default-avatar.txt");

/// Badge shown in list rows for a failed avatar.
pub const PLACEHOLDER_BADGE: &str = "(··)";

/// Placeholder art cut or padded to exactly `AVATAR_HEIGHT` x `AVATAR_WIDTH`.
#[must_use]
pub fn placeholder_lines() -> Vec<String> {
    let mut lines: Vec<String> = PLACEHOLDER_ART
        .lines()
        .take(AVATAR_HEIGHT)
        .map(|line| fit(line, AVATAR_WIDTH))
        .collect();
    lines.resize(AVATAR_HEIGHT, " ".repeat(AVATAR_WIDTH));
    lines
}

fn fit(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = text_width(&out);
    out.push_str(&" ".repeat(width - len));
    out
}

/// At most two initials, so badges and boxes keep their width.
fn short_initials(initials: &str) -> String {
    initials.chars().take(2).collect()
}

/// Initials framed in a rounded box of `AVATAR_HEIGHT` x `AVATAR_WIDTH`.
#[must_use]
pub fn initials_box(initials: &str) -> Vec<String> {
    let inner = AVATAR_WIDTH - 2;
    let initials = short_initials(initials);
    let len = text_width(&initials);
    let left = (inner - len) / 2;
    let centered = format!("{}{initials}{}", " ".repeat(left), " ".repeat(inner - len - left));
    let blank = format!("│{}│", " ".repeat(inner));

    vec![
        format!("╭{}╮", "─".repeat(inner)),
        blank.clone(),
        format!("│{centered}│"),
        blank,
        format!("╰{}╯", "─".repeat(inner)),
    ]
}

/// Four-cell badge for a list row.
#[must_use]
pub fn badge_text(avatar: &AvatarView) -> String {
    if avatar.shows_placeholder() {
        return PLACEHOLDER_BADGE.to_string();
    }
    format!("({:^2})", short_initials(&avatar.initials))
}

fn avatar_style(avatar: &AvatarView, theme: &Theme) -> String {
    match avatar.status {
        AvatarStatus::Loaded => Theme::fg(&theme.colors.accent),
        AvatarStatus::Pending => format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim)),
        AvatarStatus::Failed => Theme::fg(&theme.colors.placeholder_fg),
    }
}

/// Appends the row badge to `line`.
pub fn push_badge(line: &mut StyledLine, avatar: &AvatarView, theme: &Theme) {
    line.push_styled(&avatar_style(avatar, theme), &badge_text(avatar));
}

/// The full avatar block, one styled line per row.
#[must_use]
pub fn avatar_block(avatar: &AvatarView, theme: &Theme) -> Vec<StyledLine> {
    let rows = if avatar.shows_placeholder() {
        placeholder_lines()
    } else {
        initials_box(&avatar.initials)
    };
    let style = avatar_style(avatar, theme);

    rows.iter()
        .map(|row| {
            let mut line = StyledLine::new();
            line.push_styled(&style, row);
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn view(initials: &str, status: AvatarStatus) -> AvatarView {
        AvatarView {
            initials: initials.to_string(),
            status,
        }
    }

    #[test]
    fn placeholder_art_has_fixed_size() {
        let lines = placeholder_lines();
        assert_eq!(lines.len(), AVATAR_HEIGHT);
        assert!(lines.iter().all(|l| text_width(l) == AVATAR_WIDTH));
    }

    #[rstest]
    #[case("AL")]
    #[case("A")]
    #[case("?")]
    fn initials_box_has_fixed_size(#[case] initials: &str) {
        let lines = initials_box(initials);
        assert_eq!(lines.len(), AVATAR_HEIGHT);
        assert!(lines.iter().all(|l| text_width(l) == AVATAR_WIDTH));
        assert!(lines[2].contains(initials));
    }

    #[rstest]
    #[case(view("AL", AvatarStatus::Loaded), "(AL)")]
    #[case(view("A", AvatarStatus::Pending), "(A )")]
    #[case(view("AL", AvatarStatus::Failed), PLACEHOLDER_BADGE)]
    fn badges_are_four_cells(#[case] avatar: AvatarView, #[case] expected: &str) {
        let badge = badge_text(&avatar);
        assert_eq!(badge, expected);
        assert_eq!(text_width(&badge), 4);
    }

    #[test]
    fn failed_avatar_block_uses_placeholder_art() {
        let block = avatar_block(&view("AL", AvatarStatus::Failed), &Theme::default());
        let plain: Vec<String> = block.into_iter().map(|l| l.plain).collect();
        assert_eq!(plain, placeholder_lines());
    }
}
