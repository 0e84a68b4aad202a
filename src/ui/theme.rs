//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents, either built in or loaded from a file given in
//! the plugin configuration.
//!
//! # Built-in Themes
//!
//! - `emerald`: Dark green palette (default)
//! - `catppuccin-mocha`: Dark theme with warm tones
//! - `catppuccin-latte`: Light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#ecfdf5"
//! header_bg = "#065f46"          # optional
//! selection_fg = "#022c22"
//! selection_bg = "#34d399"
//! text_normal = "#d1d5db"
//! text_dim = "#6b7280"
//! border = "#15803d"
//! accent = "#34d399"
//! button_fg = "#022c22"
//! button_bg = "#15803d"
//! button_disabled_fg = "#6b7280"
//! button_disabled_bg = "#1f2937"
//! placeholder_fg = "#9ca3af"
//! loading_fg = "#34d399"
//! error_fg = "#f87171"
//! empty_state_fg = "#9ca3af"
//! ```

use crate::domain::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Names accepted by [`Theme::from_name`].
pub const BUILT_IN_THEMES: [&str; 3] = ["emerald", "catppuccin-mocha", "catppuccin-latte"];

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#d1d5db"`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// List title color.
    pub header_fg: String,
    /// Optional list title background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Row under the cursor.
    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Job titles, footer hints, separators' text.
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Selected-record marker, loaded avatar initials, detail labels.
    pub accent: String,

    /// Enabled pager buttons.
    pub button_fg: String,
    pub button_bg: String,
    /// Disabled pager buttons.
    pub button_disabled_fg: String,
    pub button_disabled_bg: String,

    /// Placeholder avatar art and `No data to display` values.
    pub placeholder_fg: String,

    pub loading_fg: String,
    pub error_fg: String,

    /// Empty list message color.
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name. See [`BUILT_IN_THEMES`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "emerald" => include_str!("../../themes/emerald.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Theme`] if the file cannot be read or its
    /// content is not a complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            RosterError::Theme(format!("failed to read {}: {e}", path.display()))
        })?;

        Self::from_toml(&contents)
    }

    /// Parses a theme from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Theme`] on invalid syntax or missing colors.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| RosterError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple. Falls back to white on bad input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color escape sequence (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Foreground plus background in one string.
    #[must_use]
    pub fn fg_bg(fg: &str, bg: &str) -> String {
        format!("{}{}", Self::fg(fg), Self::bg(bg))
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling (colors, bold, dim).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the `emerald` theme.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name("emerald").expect("Built-in emerald theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        for name in BUILT_IN_THEMES {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn unknown_theme_name_is_none() {
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn loads_theme_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let body = include_str!("../../themes/catppuccin-latte.toml").replace(
            "name = \"catppuccin-latte\"",
            "name = \"custom\"",
        );
        file.write_all(body.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
    }

    #[test]
    fn incomplete_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = \"broken\"\n[colors]\nheader_fg = \"#ffffff\"").unwrap();

        assert!(matches!(Theme::from_file(file.path()), Err(RosterError::Theme(_))));
    }

    #[test]
    fn missing_theme_file_is_a_theme_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Theme::from_file(dir.path().join("nope.toml")),
            Err(RosterError::Theme(_))
        ));
    }

    #[rstest]
    #[case("#15803d", "\u{1b}[38;2;21;128;61m")]
    #[case("15803d", "\u{1b}[38;2;21;128;61m")]
    #[case("#fff", "\u{1b}[38;2;255;255;255m")]
    fn hex_colors_become_truecolor_sequences(#[case] hex: &str, #[case] expected: &str) {
        assert_eq!(Theme::fg(hex), expected);
    }
}
