//! Worker thread implementation for payload decoding.
//!
//! Decoding a large user list is the only CPU-heavy step between the response
//! arriving and the list being drawn, so it runs on a Zellij worker thread and
//! keeps the render loop responsive.

use crate::domain::{decode_users, RosterError};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state. Stateless apart from what Zellij needs to spawn it.
#[derive(Serialize, Deserialize, Default)]
pub struct RosterWorker;

impl RosterWorker {
    /// Reconstructs the plugin's span context so worker spans nest under it.
    ///
    /// Returns a context guard that must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes a worker message and returns the response to post back.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        match message {
            WorkerMessage::DecodeUsers { generation, body, .. } => {
                let _span = tracing::debug_span!("worker_decode_users", generation, bytes = body.len()).entered();

                match decode_users(body.as_bytes()) {
                    Ok(users) => WorkerResponse::UsersDecoded { generation, users },
                    Err(e) => {
                        tracing::debug!(error = %e, "user payload rejected");
                        let message = match e {
                            RosterError::Decode(detail) => detail,
                            other => other.to_string(),
                        };
                        WorkerResponse::DecodeFailed { generation, message }
                    }
                }
            }
        }
    }
}

/// Tracks whether worker tracing has been initialized.
static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

fn post_response(name: String, response: &WorkerResponse) {
    match serde_json::to_string(response) {
        Ok(payload) => post_message_to_plugin(PluginMessage {
            name,
            payload,
            worker_name: None,
        }),
        Err(e) => tracing::debug!(error = %e, "failed to serialize worker response"),
    }
}

/// Tracing settings for the worker, taken from the plugin's message.
fn worker_tracing_config(message: Option<&WorkerMessage>) -> crate::Config {
    crate::Config {
        trace_level: message.and_then(WorkerMessage::trace_level).map(String::from),
        ..Default::default()
    }
}

impl ZellijWorker<'_> for RosterWorker {
    /// Decodes the JSON `WorkerMessage` in `payload`, handles it and posts the
    /// response back under the same message name.
    fn on_message(&mut self, message: String, payload: String) {
        let parsed = serde_json::from_str::<WorkerMessage>(&payload);

        if !WORKER_TRACING_INITIALIZED.swap(true, std::sync::atomic::Ordering::Relaxed) {
            crate::observability::init_tracing(&worker_tracing_config(parsed.as_ref().ok()));
        }

        let response = match parsed {
            Ok(worker_message) => self.handle_message(worker_message),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                WorkerResponse::Error {
                    message: format!("unreadable worker message: {e}"),
                }
            }
        };

        post_response(message, &response);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn decodes_body_and_echoes_generation() {
        let body = r#"[{"id":"1","avatar":"https://a/1.png","profile":{"firstName":"Ada","lastName":"Lovelace"},"jobTitle":"Analyst","Bio":"x"}]"#;
        let response = RosterWorker.handle_message(WorkerMessage::decode_users(9, body.to_string(), None));

        let WorkerResponse::UsersDecoded { generation, users } = response else {
            panic!("expected decoded users");
        };
        assert_eq!(generation, 9);
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].full_name(), "Ada Lovelace");
    }

    #[rstest]
    #[case("not json")]
    #[case(r#"{"id":"1"}"#)]
    #[case(r#"[{"avatar":"x"}]"#)]
    fn malformed_bodies_fail_with_generation(#[case] body: &str) {
        let response = RosterWorker.handle_message(WorkerMessage::decode_users(3, body.to_string(), None));

        assert!(matches!(response, WorkerResponse::DecodeFailed { generation: 3, .. }));
    }

    #[rstest]
    #[case(Some("debug"), Some("debug"))]
    #[case(None, None)]
    fn worker_tracing_follows_plugin_trace_level(#[case] sent: Option<&str>, #[case] expected: Option<&str>) {
        let message = WorkerMessage::decode_users(1, "[]".into(), sent.map(String::from));
        let json = serde_json::to_string(&message).unwrap();
        let received: WorkerMessage = serde_json::from_str(&json).unwrap();

        assert_eq!(worker_tracing_config(Some(&received)).trace_level.as_deref(), expected);
    }

    #[test]
    fn message_without_trace_level_still_parses() {
        let json = r#"{"DecodeUsers":{"generation":4,"body":"[]"}}"#;
        let message: WorkerMessage = serde_json::from_str(json).unwrap();

        assert_eq!(message.trace_level(), None);
        assert_eq!(worker_tracing_config(None).trace_level, None);
    }

    #[test]
    fn response_survives_the_json_hop() {
        let response = WorkerResponse::DecodeFailed {
            generation: 1,
            message: "eof".into(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(serde_json::from_str::<WorkerResponse>(&json).unwrap(), response);
    }
}
