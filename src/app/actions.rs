//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! runtime executes them in order after the state change has been applied, so
//! an action always observes the committed state that produced it.
//!
//! # Example
//!
//! ```rust
//! use rosterview::app::{Action, RequestContext};
//!
//! let actions = vec![Action::FetchUsers {
//!     url: "https://api.example.com/users".to_string(),
//!     context: RequestContext::Users { generation: 1 },
//! }];
//! ```

use super::requests::RequestContext;
use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues the GET for the user list.
    FetchUsers {
        /// Endpoint URL from configuration.
        url: String,
        /// Echoed back by the host with the result.
        context: RequestContext,
    },

    /// Issues a GET that decides whether an avatar loads or falls back.
    ProbeAvatar {
        /// Avatar URL taken from the record.
        url: String,
        /// Echoed back by the host with the result.
        context: RequestContext,
    },

    /// Posts a message to the background worker thread.
    PostToWorker(WorkerMessage),

    /// Requests a timer event that advances the scroll animation by one step.
    ScheduleScrollTick {
        /// Delay before the tick, in seconds.
        seconds: f64,
    },
}
