//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the domain/worker layers.
//!
//! ```text
//! Host Events → Events → Event Handler → State Mutations → Actions → Side Effects
//!                             ↑                                  ↓
//!                             └──── Web Results / Worker Responses ┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`lifetime`]: Generation token that cancels results of unmounted views
//! - [`modes`]: Load phase and avatar status state machines
//! - [`pagination`]: Fixed-size page arithmetic
//! - [`requests`]: Context maps that tag outbound web requests
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod lifetime;
pub mod modes;
pub mod pagination;
pub mod requests;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use lifetime::ViewLifetime;
pub use modes::{AvatarStatus, LoadPhase};
pub use pagination::{Paginator, PAGE_SIZE};
pub use requests::RequestContext;
pub use state::AppState;
