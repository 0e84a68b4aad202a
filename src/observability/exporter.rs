//! Span exporter that appends OTLP/JSON batches to a rotating file.

use std::path::PathBuf;

use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::{Config, TracerProvider};

use super::otlp::encode_batch;
use super::sink::RotatingSink;

/// Writes each export batch as one JSON line.
#[derive(Debug)]
pub struct FileSpanExporter {
    sink: RotatingSink,
    resource: Resource,
    scope: String,
    is_shutdown: bool,
}

impl FileSpanExporter {
    #[must_use]
    pub fn new(sink: RotatingSink, resource: Resource, scope: impl Into<String>) -> Self {
        Self {
            sink,
            resource,
            scope: scope.into(),
            is_shutdown: false,
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.is_shutdown {
            return Err(TraceError::from("exporter is shut down"));
        }
        let document = encode_batch(&self.resource, &self.scope, batch);
        let line = serde_json::to_string(&document).map_err(|e| TraceError::from(e.to_string()))?;
        self.sink
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

/// Provider exporting every finished span synchronously to `trace_file`.
///
/// The plugin has no async runtime, so spans go through the simple
/// (non-batching) processor.
#[must_use]
pub fn file_tracer_provider(trace_file: PathBuf, resource: Resource, scope: &str) -> TracerProvider {
    let exporter = FileSpanExporter::new(RotatingSink::new(trace_file), resource.clone(), scope);

    TracerProvider::builder()
        .with_config(Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
