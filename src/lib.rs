//! Rosterview: a Zellij plugin that browses a remote user directory.
//!
//! The plugin fetches a JSON array of user records from one HTTP endpoint,
//! pages through it four records at a time and shows the selected record in
//! a detail panel next to (or below) the list. Avatars that fail to load are
//! replaced by a bundled placeholder.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Host events / commands
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling and actions                       │
//! │  - Pagination, selection, view lifetime             │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────────┐         ┌───────────────────────┐
//! │ UI Layer (ui/)        │         │ Worker Layer (worker/)│
//! │ - Layout and scroll   │         │ - Payload decoding    │
//! │ - Components, avatar  │         │ - IPC bridge          │
//! │ - Theming             │         │                       │
//! └───────────────────────┘         └───────────────────────┘
//!         │                                     │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - UserRecord schema, errors (domain/)              │
//! │  - Host paths (infrastructure/)                     │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OTLP/JSON span file                              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/rosterview.wasm" {
//!         endpoint "https://api.example.com/users"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! When no `endpoint` is configured, the value of `ROSTERVIEW_API` at build
//! time is used.
//!
//! # Flow
//!
//! 1. Load: parse configuration, initialize tracing, build `AppState`, request
//!    the `WebAccess` permission.
//! 2. Mount (access granted, or the pane is shown with no view mounted): start
//!    a new view generation and GET the endpoint. Hiding the pane keeps the
//!    view; only `r` and `q` end it.
//! 3. The body is decoded on the worker and comes back as `UsersDecoded` or
//!    `DecodeFailed`.
//! 4. Ready: the current page is rendered; avatars of visible records are
//!    probed once each.
//! 5. Selecting a record commits it, then scrolls the detail panel into view.
//!
//! # Example
//!
//! ```
//! use rosterview::{handle_event, initialize, Action, Config, Event};
//!
//! let config = Config {
//!     endpoint: Some("https://api.example.com/users".to_string()),
//!     ..Default::default()
//! };
//! let mut state = initialize(&config);
//!
//! let (_, actions) = handle_event(&mut state, &Event::Mount)?;
//! assert!(matches!(actions.as_slice(), [Action::FetchUsers { .. }]));
//! # Ok::<(), rosterview::RosterError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{Result, RosterError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration map.
///
/// ```kdl
/// plugin location="file:/path/to/rosterview.wasm" {
///     endpoint "https://api.example.com/users"
///     theme "emerald"
///     theme_file "~/.config/rosterview/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// URL returning the JSON array of user records.
    ///
    /// Validated when the view mounts; a missing or invalid value shows the
    /// error screen.
    pub endpoint: Option<String>,

    /// Built-in theme name: `emerald`, `catppuccin-mocha` or
    /// `catppuccin-latte`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a TOML theme file. `~` resolves to the host home directory.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: option_env!("ROSTERVIEW_API").map(String::from),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Reads the options Zellij passes at load.
    ///
    /// Blank values count as unset, so a blank `endpoint` falls back to the
    /// build-time default.
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };
        let defaults = Self::default();

        Self {
            endpoint: get("endpoint").or(defaults.endpoint),
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
        }
    }
}

/// Loads the theme named by `config`, falling back to the default theme.
fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        let path = infrastructure::expand_tilde(theme_file);
        return Theme::from_file(&path).unwrap_or_else(|e| {
            tracing::warn!(theme_file = %path, error = %e, "failed to load theme file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_deref().map_or_else(Theme::default, |name| {
        Theme::from_name(name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %name, available = ?ui::theme::BUILT_IN_THEMES, "unknown theme, using default");
            Theme::default()
        })
    })
}

/// Builds the initial state: no records, phase `Loading`, themed per `config`.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(endpoint = ?config.endpoint, "initializing rosterview plugin");
    let mut state = AppState::new(config.endpoint.clone(), load_theme(config));
    state.trace_level.clone_from(&config.trace_level);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn reads_all_options() {
        let config = Config::from_zellij(&map(&[
            ("endpoint", " https://api.example.com/users "),
            ("theme", "catppuccin-latte"),
            ("theme_file", "~/theme.toml"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.endpoint.as_deref(), Some("https://api.example.com/users"));
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file.as_deref(), Some("~/theme.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[rstest]
    #[case(&[])]
    #[case(&[("endpoint", "   ")])]
    fn missing_endpoint_uses_build_default(#[case] pairs: &[(&str, &str)]) {
        let config = Config::from_zellij(&map(pairs));
        assert_eq!(config.endpoint, option_env!("ROSTERVIEW_API").map(String::from));
        assert!(config.theme_name.is_none());
    }

    #[test]
    fn initialize_carries_endpoint() {
        let config = Config {
            endpoint: Some("https://api.example.com/users".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.endpoint.as_deref(), Some("https://api.example.com/users"));
        assert_eq!(state.trace_level, None);
    }

    #[test]
    fn initialize_carries_trace_level() {
        let config = Config::from_zellij(&map(&[("trace_level", "debug")]));
        assert_eq!(initialize(&config).trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn theme_file_takes_precedence_over_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let custom = include_str!("../themes/catppuccin-latte.toml");
        file.write_all(custom.as_bytes()).unwrap();

        let config = Config {
            theme_name: Some("catppuccin-mocha".to_string()),
            theme_file: Some(file.path().to_string_lossy().into_owned()),
            ..Default::default()
        };

        let expected = Theme::from_toml(custom).unwrap();
        assert_eq!(load_theme(&config).colors.header_fg, expected.colors.header_fg);
    }

    #[rstest]
    #[case(Some("no-such-theme"), None)]
    #[case(None, Some("/nonexistent/theme.toml"))]
    fn unusable_theme_falls_back_to_default(#[case] name: Option<&str>, #[case] file: Option<&str>) {
        let config = Config {
            theme_name: name.map(String::from),
            theme_file: file.map(String::from),
            ..Default::default()
        };
        assert_eq!(load_theme(&config).colors.header_fg, Theme::default().colors.header_fg);
    }
}
