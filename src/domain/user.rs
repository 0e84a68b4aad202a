//! User record schema and payload decoding.
//!
//! The endpoint returns a JSON array of objects shaped like:
//!
//! ```json
//! [{
//!   "id": "1",
//!   "avatar": "https://example.com/a.png",
//!   "profile": {
//!     "firstName": "Ada",
//!     "lastName": "Lovelace",
//!     "username": "ada",
//!     "email": "ada@example.com"
//!   },
//!   "jobTitle": "Analyst",
//!   "Bio": "First programmer."
//! }]
//! ```
//!
//! The bio key is capitalised upstream while every other key is camelCase. Both
//! `Bio` and `bio` are accepted.

use super::error::{Result, RosterError};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Literal shown in the detail panel for any empty or absent field.
pub const NO_DATA: &str = "No data to display";

/// Record identifier as sent by the endpoint.
///
/// Mock APIs commonly send ids as strings (`"7"`), hand-written ones as numbers.
/// Both are kept verbatim; the id is only used as a key and for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(u64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Reads a string field that may be `null`, treating `null` as empty.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Personal details nested under `profile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "firstName", default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(rename = "lastName", default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// One user entity as returned by the data endpoint.
///
/// Immutable once decoded. The view refers to records by their position in the
/// fetched sequence, so two records with equal contents are still distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    /// Empty when the endpoint sends no avatar or `null`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub avatar: String,
    pub profile: Profile,
    #[serde(rename = "jobTitle", default)]
    pub job_title: Option<String>,
    #[serde(rename = "Bio", alias = "bio", default)]
    pub bio: Option<String>,
}

impl UserRecord {
    /// Returns `"First Last"`, trimmed so a missing half leaves no stray space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.profile.first_name, self.profile.last_name)
            .trim()
            .to_string()
    }

    /// Returns up to two uppercase initials, or `"?"` when both names are empty.
    #[must_use]
    pub fn initials(&self) -> String {
        let initials: String = [&self.profile.first_name, &self.profile.last_name]
            .iter()
            .filter_map(|name| name.trim().chars().next())
            .flat_map(char::to_uppercase)
            .collect();

        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }
}

/// Returns the value, or [`NO_DATA`] when it is absent or blank.
///
/// # Examples
///
/// ```
/// use rosterview::domain::{display_or_placeholder, NO_DATA};
///
/// assert_eq!(display_or_placeholder(Some("ada")), "ada");
/// assert_eq!(display_or_placeholder(Some("  ")), NO_DATA);
/// assert_eq!(display_or_placeholder(None), NO_DATA);
/// ```
#[must_use]
pub fn display_or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NO_DATA,
    }
}

/// Decodes a response body into user records.
///
/// # Errors
///
/// Returns [`RosterError::Decode`] if the body is not valid JSON, is not an
/// array, or any element is missing `id` or `profile`.
pub fn decode_users(body: &[u8]) -> Result<Vec<UserRecord>> {
    let users: Vec<UserRecord> =
        serde_json::from_slice(body).map_err(|e| RosterError::Decode(e.to_string()))?;

    tracing::debug!(user_count = users.len(), "decoded user payload");
    Ok(users)
}
