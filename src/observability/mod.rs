//! Span export to a local OTLP/JSON file.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → FileSpanExporter → rosterview-otlp.json
//! ```
//!
//! The file lives in the plugin data directory and rotates at 10 MiB, keeping
//! three backups. Verbosity comes from the `trace_level` option (an
//! `EnvFilter` directive, default `"info"`).
//!
//! - [`otlp`]: batch encoding
//! - [`exporter`]: `SpanExporter` and provider construction
//! - [`sink`]: size-rotated file

mod exporter;
mod otlp;
mod sink;

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::Config;

const SERVICE_NAME: &str = "Rosterview";
const TRACE_FILE_NAME: &str = "rosterview-otlp.json";
const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global subscriber. Later calls are no-ops.
///
/// Tracing is best effort: if the data directory cannot be created or the
/// filter directive is invalid, the plugin runs without it.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);
    let Ok(filter) = EnvFilter::try_new(level) else {
        return;
    };

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = exporter::file_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource, SERVICE_NAME);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME)))
        .try_init();
}
