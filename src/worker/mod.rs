//! Background worker thread for payload decoding.
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::RosterWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
