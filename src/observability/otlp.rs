//! OTLP/JSON encoding of finished spans.
//!
//! Each export batch becomes one [`TraceDocument`], the `resourceSpans`
//! envelope understood by OTLP collectors and trace viewers:
//!
//! ```json
//! {"resourceSpans":[{"resource":{"attributes":[..]},
//!   "scopeSpans":[{"scope":{"name":"Rosterview"},"spans":[..]}]}]}
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{Array, KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceDocument {
    resource_spans: Vec<ResourceSpans>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResourceSpans {
    resource: ResourceAttributes,
    scope_spans: Vec<ScopeSpans>,
}

#[derive(Debug, Serialize)]
struct ResourceAttributes {
    attributes: Vec<Attribute>,
}

#[derive(Debug, Serialize)]
struct ScopeSpans {
    scope: Scope,
    spans: Vec<EncodedSpan>,
}

#[derive(Debug, Serialize)]
struct Scope {
    name: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Attribute {
    key: String,
    value: AnyValue,
}

/// OTLP `AnyValue`. Integers travel as strings, as the JSON mapping requires.
#[derive(Debug, Serialize, PartialEq)]
pub enum AnyValue {
    #[serde(rename = "boolValue")]
    Bool(bool),
    #[serde(rename = "intValue")]
    Int(String),
    #[serde(rename = "doubleValue")]
    Double(f64),
    #[serde(rename = "stringValue")]
    String(String),
    #[serde(rename = "arrayValue")]
    Array { values: Vec<AnyValue> },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EncodedSpan {
    trace_id: String,
    span_id: String,
    parent_span_id: String,
    name: String,
    kind: u8,
    start_time_unix_nano: String,
    end_time_unix_nano: String,
    attributes: Vec<Attribute>,
    events: Vec<EncodedEvent>,
    links: Vec<EncodedLink>,
    status: EncodedStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EncodedEvent {
    time_unix_nano: String,
    name: String,
    attributes: Vec<Attribute>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EncodedLink {
    trace_id: String,
    span_id: String,
    attributes: Vec<Attribute>,
}

#[derive(Debug, Serialize, PartialEq)]
struct EncodedStatus {
    code: u8,
    message: String,
}

/// Wraps `batch` in a single resource/scope envelope.
#[must_use]
pub fn encode_batch(resource: &Resource, scope: &str, batch: &[SpanData]) -> TraceDocument {
    let attributes = resource
        .iter()
        .map(|(key, value)| Attribute {
            key: key.to_string(),
            value: any_value(value),
        })
        .collect();

    TraceDocument {
        resource_spans: vec![ResourceSpans {
            resource: ResourceAttributes { attributes },
            scope_spans: vec![ScopeSpans {
                scope: Scope {
                    name: scope.to_string(),
                },
                spans: batch.iter().map(encode_span).collect(),
            }],
        }],
    }
}

fn encode_span(span: &SpanData) -> EncodedSpan {
    let parent_span_id = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };

    EncodedSpan {
        trace_id: format!("{:032x}", span.span_context.trace_id()),
        span_id: format!("{:016x}", span.span_context.span_id()),
        parent_span_id,
        name: span.name.to_string(),
        kind: span_kind_code(&span.span_kind),
        start_time_unix_nano: unix_nanos(span.start_time),
        end_time_unix_nano: unix_nanos(span.end_time),
        attributes: attributes(&span.attributes),
        events: span.events.iter().map(encode_event).collect(),
        links: span.links.iter().map(encode_link).collect(),
        status: encode_status(&span.status),
    }
}

fn encode_event(event: &Event) -> EncodedEvent {
    EncodedEvent {
        time_unix_nano: unix_nanos(event.timestamp),
        name: event.name.to_string(),
        attributes: attributes(&event.attributes),
    }
}

fn encode_link(link: &Link) -> EncodedLink {
    EncodedLink {
        trace_id: format!("{:032x}", link.span_context.trace_id()),
        span_id: format!("{:016x}", link.span_context.span_id()),
        attributes: attributes(&link.attributes),
    }
}

fn attributes(pairs: &[KeyValue]) -> Vec<Attribute> {
    pairs
        .iter()
        .map(|kv| Attribute {
            key: kv.key.to_string(),
            value: any_value(&kv.value),
        })
        .collect()
}

#[must_use]
pub fn any_value(value: &Value) -> AnyValue {
    match value {
        Value::Bool(b) => AnyValue::Bool(*b),
        Value::I64(i) => AnyValue::Int(i.to_string()),
        Value::F64(f) => AnyValue::Double(*f),
        Value::String(s) => AnyValue::String(s.to_string()),
        Value::Array(array) => AnyValue::Array {
            values: array_values(array),
        },
    }
}

#[allow(unreachable_patterns)]
fn array_values(array: &Array) -> Vec<AnyValue> {
    match array {
        Array::Bool(items) => items.iter().map(|b| AnyValue::Bool(*b)).collect(),
        Array::I64(items) => items.iter().map(|i| AnyValue::Int(i.to_string())).collect(),
        Array::F64(items) => items.iter().map(|f| AnyValue::Double(*f)).collect(),
        Array::String(items) => items.iter().map(|s| AnyValue::String(s.to_string())).collect(),
        _ => vec![AnyValue::String(format!("{array:?}"))],
    }
}

/// OTLP `SpanKind` number; 0 (unspecified) is never produced.
#[must_use]
pub const fn span_kind_code(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn encode_status(status: &Status) -> EncodedStatus {
    let (code, message) = match status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    };
    EncodedStatus { code, message }
}

/// Nanoseconds since the epoch as a decimal string; pre-epoch times map to "0".
#[must_use]
pub fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default()
        .to_string()
}
