//! Error types for the Rosterview plugin.
//!
//! This module defines the centralized error type [`RosterError`] and a type alias
//! [`Result`] used throughout the plugin. Every variant except [`RosterError::Io`]
//! and [`RosterError::Theme`] can end a view instance in the failed state, where
//! its `Display` text is shown after `Error loading data: `.

use thiserror::Error;

/// The main error type for Rosterview operations.
///
/// Fetch failures are split by cause so a transport problem (non-2xx status) is
/// never confused with a payload that arrived but does not match the
/// [`UserRecord`](crate::domain::UserRecord) schema.
///
/// # Examples
///
/// ```
/// use rosterview::domain::RosterError;
///
/// let err = RosterError::Http { status: 404 };
/// assert_eq!(err.to_string(), "Request failed with status code 404");
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
    /// The endpoint answered with a status outside `200..=299`.
    #[error("Request failed with status code {status}")]
    Http {
        /// HTTP status reported by the host.
        status: u16,
    },

    /// The response body is not a JSON array of user records.
    ///
    /// The string carries the `serde_json` message, including line and column.
    #[error("Malformed user payload: {0}")]
    Decode(String),

    /// Configuration is invalid or missing (for example no endpoint URL).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The host refused a permission the view needs.
    #[error("Permission denied: {0}")]
    Permission(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RosterError {
    /// Returns `true` when the error came from the data request itself rather
    /// than from local setup.
    #[must_use]
    pub const fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Decode(_) | Self::Worker(_))
    }
}

/// A specialized `Result` type for Rosterview operations.
pub type Result<T> = std::result::Result<T, RosterError>;
