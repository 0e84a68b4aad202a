//! Path utilities for the Zellij sandbox environment.

use std::path::PathBuf;

/// Returns the directory holding Rosterview's trace files.
///
/// `/host` points to the cwd of the last focused terminal, or the folder where
/// Zellij was started. Started from a home directory this is
/// `~/.local/share/zellij/rosterview`.
///
/// # Examples
///
/// ```
/// use rosterview::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/rosterview");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("rosterview")
}

/// Expands a leading `~` to the sandbox's `/host` mount.
///
/// # Examples
///
/// ```
/// use rosterview::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
