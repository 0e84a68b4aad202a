//! Context attached to outbound web requests.
//!
//! The host echoes a string map back with every `WebRequestResult`. The plugin
//! uses it to tell the user-list request from avatar probes and to carry the
//! generation of the view that issued the request.

use crate::domain::{Result, RosterError};
use std::collections::BTreeMap;

const KIND_KEY: &str = "rosterview.kind";
const GENERATION_KEY: &str = "rosterview.generation";
const URL_KEY: &str = "rosterview.url";

const KIND_USERS: &str = "users";
const KIND_AVATAR: &str = "avatar";

/// Identifies which request a web result belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestContext {
    /// The single user-list fetch of a view instance.
    Users { generation: u64 },

    /// A probe of one avatar URL.
    Avatar { generation: u64, url: String },
}

impl RequestContext {
    /// Generation of the view instance that issued the request.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        match self {
            Self::Users { generation } | Self::Avatar { generation, .. } => *generation,
        }
    }

    /// Encodes the context into the map handed to `web_request`.
    #[must_use]
    pub fn to_context(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert(GENERATION_KEY.to_string(), self.generation().to_string());
        match self {
            Self::Users { .. } => {
                map.insert(KIND_KEY.to_string(), KIND_USERS.to_string());
            }
            Self::Avatar { url, .. } => {
                map.insert(KIND_KEY.to_string(), KIND_AVATAR.to_string());
                map.insert(URL_KEY.to_string(), url.clone());
            }
        }
        map
    }

    /// Decodes a context map returned by the host.
    ///
    /// Returns `None` for maps this plugin did not produce.
    #[must_use]
    pub fn from_context(map: &BTreeMap<String, String>) -> Option<Self> {
        let generation = map.get(GENERATION_KEY)?.parse::<u64>().ok()?;
        match map.get(KIND_KEY)?.as_str() {
            KIND_USERS => Some(Self::Users { generation }),
            KIND_AVATAR => Some(Self::Avatar {
                generation,
                url: map.get(URL_KEY)?.clone(),
            }),
            _ => None,
        }
    }
}

/// Checks that a configured endpoint is an absolute http(s) URL.
///
/// # Errors
///
/// Returns [`RosterError::Config`] if the value is blank, does not parse, or
/// uses another scheme.
pub fn parse_endpoint(raw: &str) -> Result<url::Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(RosterError::Config("no endpoint configured".to_string()));
    }

    let url = url::Url::parse(raw)
        .map_err(|e| RosterError::Config(format!("invalid endpoint '{raw}': {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(RosterError::Config(format!(
            "unsupported endpoint scheme '{other}'"
        ))),
    }
}
