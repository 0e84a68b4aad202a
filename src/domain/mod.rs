//! Domain layer for the Rosterview plugin.
//!
//! Holds the types that describe what the remote endpoint returns and how a
//! record is presented, independent of Zellij APIs.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`user`]: `UserRecord` schema, payload decoding and display fallbacks
//!
//! # Examples
//!
//! ```
//! use rosterview::domain::{decode_users, Result};
//!
//! fn load(body: &[u8]) -> Result<usize> {
//!     Ok(decode_users(body)?.len())
//! }
//! ```

pub mod error;
pub mod user;

pub use error::{Result, RosterError};
pub use user::{decode_users, display_or_placeholder, Profile, UserId, UserRecord, NO_DATA};
