//! tracing Layer that feeds the diagnostic JSONL file.

use std::fmt::Write as FmtWrite;
use std::path::Path;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

use super::entry::DiagnosticEntry;
use super::writer::DiagnosticWriter;

/// Writes every tracing event it sees to a [`DiagnosticWriter`].
#[derive(Clone)]
pub struct DiagnosticLayer {
    writer: Arc<DiagnosticWriter>,
}

impl DiagnosticLayer {
    pub fn new(dir: impl AsRef<Path>, session: impl Into<String>) -> std::io::Result<Self> {
        Ok(Self {
            writer: Arc::new(DiagnosticWriter::new(dir, session)?),
        })
    }

    pub fn log_path(&self) -> &Path {
        self.writer.path()
    }
}

impl<S> Layer<S> for DiagnosticLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = FieldCollector::default();
        event.record(&mut visitor);

        let mut entry = DiagnosticEntry::new(
            metadata.level().as_str().to_lowercase(),
            metadata.target(),
            visitor.message.unwrap_or_default(),
        );

        if !visitor.fields.is_empty() {
            entry = entry.with_fields(Value::Object(visitor.fields));
        }

        if let Some(scope) = ctx.event_scope(event) {
            let spans: Vec<&str> = scope.from_root().map(|span| span.name()).collect();
            if !spans.is_empty() {
                entry = entry.with_span(spans.join(" > "));
            }
        }

        // A logging failure must not take the UI down.
        let _ = self.writer.write(&entry);
    }
}

#[derive(Default)]
struct FieldCollector {
    message: Option<String>,
    fields: Map<String, Value>,
}

impl FieldCollector {
    fn insert(&mut self, field: &Field, value: Value) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for FieldCollector {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);
        if field.name() == "message" {
            self.message = Some(buf);
        } else {
            self.insert(field, Value::String(buf));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.insert(field, Value::String(value.to_string()));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, Value::Number(value.into()));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, Value::Number(value.into()));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, Value::Bool(value));
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.insert(field, Value::String(value.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::read_entries;
    use tempfile::TempDir;
    use tracing_subscriber::prelude::*;

    #[test]
    fn captures_events_with_fields_and_spans() {
        let temp = TempDir::new().unwrap();
        let layer = DiagnosticLayer::new(temp.path(), "test").unwrap();
        let path = layer.log_path().to_path_buf();

        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("plain message");
            let span = tracing::info_span!("submit");
            let _guard = span.enter();
            tracing::error!(status = 500u64, error = "server returned 500", "Error calling API");
        });

        let entries = read_entries(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].msg, "plain message");
        assert_eq!(entries[0].level, "info");

        let failure = &entries[1];
        assert!(failure.is_error());
        assert_eq!(failure.span.as_deref(), Some("submit"));
        assert_eq!(failure.field_str("error"), Some("server returned 500"));
        assert_eq!(
            failure.fields.as_ref().and_then(|f| f.get("status")).and_then(Value::as_u64),
            Some(500)
        );
    }
}
