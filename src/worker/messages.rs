//! Worker thread message types for cross-thread communication.
//!
//! The plugin hands raw response bodies to the worker, which decodes them into
//! [`UserRecord`]s and answers with the result. Every message carries the
//! generation of the view instance that issued it so late answers can be
//! dropped. Trace context travels with the request so worker spans join the
//! plugin's trace.

use crate::domain::UserRecord;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the trace and span IDs of the active span.
    ///
    /// Returns `None` when no valid OpenTelemetry context is active, which is
    /// always the case when tracing is disabled.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Messages sent from the plugin to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Decode a user-list response body.
    DecodeUsers {
        /// Generation of the view that fetched the body.
        generation: u64,

        /// Response body, already checked to be UTF-8.
        body: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,

        /// Plugin's `trace_level`, so the worker filters spans the same way.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        trace_level: Option<String>,
    },
}

impl WorkerMessage {
    /// Creates a `DecodeUsers` message with the current trace context.
    pub fn decode_users(generation: u64, body: String, trace_level: Option<String>) -> Self {
        Self::DecodeUsers {
            generation,
            body,
            trace_context: TraceContext::from_current(),
            trace_level,
        }
    }

    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::DecodeUsers { trace_context, .. } => trace_context.as_ref(),
        }
    }

    #[must_use]
    pub fn trace_level(&self) -> Option<&str> {
        match self {
            Self::DecodeUsers { trace_level, .. } => trace_level.as_deref(),
        }
    }
}

/// Responses sent from the worker back to the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The body decoded into records, in payload order.
    UsersDecoded {
        generation: u64,
        users: Vec<UserRecord>,
    },

    /// The body did not match the record schema.
    DecodeFailed {
        generation: u64,
        /// Display text of the decode error.
        message: String,
    },

    /// The worker could not understand the request at all.
    Error {
        /// Human-readable error message.
        message: String,
    },
}
