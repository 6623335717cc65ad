//! tracing Layer feeding the diagnostic channel.

use std::fmt::Write as FmtWrite;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

use super::entry::DiagnosticEntry;
use super::writer::DiagnosticWriter;
use crate::contact::DIAGNOSTICS_TARGET;

/// Shared in-memory list of captured diagnostic records.
///
/// Clones share the same list, so a handle kept by the app sees everything
/// the layer captured.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticLog {
    entries: Arc<Mutex<Vec<DiagnosticEntry>>>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, entry: DiagnosticEntry) {
        self.entries.lock().push(entry);
    }

    /// Snapshot of every captured record, oldest first.
    pub fn entries(&self) -> Vec<DiagnosticEntry> {
        self.entries.lock().clone()
    }

    /// Records emitted on `target`.
    pub fn for_target(&self, target: &str) -> Vec<DiagnosticEntry> {
        self.entries
            .lock()
            .iter()
            .filter(|e| e.target == target)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

/// Captures WARN and ERROR events, plus anything on the diagnostics target.
pub struct DiagnosticLayer {
    log: DiagnosticLog,
    writer: Option<Arc<DiagnosticWriter>>,
}

impl DiagnosticLayer {
    pub fn new(log: DiagnosticLog) -> Self {
        Self { log, writer: None }
    }

    /// Also append captured records to a JSONL file.
    pub fn with_writer(mut self, writer: DiagnosticWriter) -> Self {
        self.writer = Some(Arc::new(writer));
        self
    }

    pub fn log(&self) -> &DiagnosticLog {
        &self.log
    }

    fn captures(level: &Level, target: &str) -> bool {
        *level <= Level::WARN || target == DIAGNOSTICS_TARGET
    }
}

impl<S> Layer<S> for DiagnosticLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !Self::captures(metadata.level(), metadata.target()) {
            return;
        }

        let mut visitor = JsonVisitor::new();
        event.record(&mut visitor);

        let level = metadata.level().as_str().to_lowercase();
        let mut entry = DiagnosticEntry::new(
            level,
            metadata.target(),
            visitor.message.unwrap_or_default(),
        );
        if !visitor.fields.is_empty() {
            entry = entry.with_fields(serde_json::Value::Object(visitor.fields));
        }

        if let Some(writer) = &self.writer {
            // Logging must never take the app down
            let _ = writer.write(&entry);
        }
        self.log.push(entry);
    }
}

/// Visitor that extracts the message and fields from tracing events.
struct JsonVisitor {
    message: Option<String>,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl JsonVisitor {
    fn new() -> Self {
        Self {
            message: None,
            fields: serde_json::Map::new(),
        }
    }
}

impl Visit for JsonVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);

        if field.name() == "message" {
            self.message = Some(buf);
        } else {
            self.fields
                .insert(field.name().to_string(), serde_json::Value::String(buf));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.insert(
                field.name().to_string(),
                serde_json::Value::String(value.to_string()),
            );
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::Number(value.into()));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::Number(value.into()));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::Bool(value));
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.fields.insert(
            field.name().to_string(),
            serde_json::Value::String(value.to_string()),
        );
    }
}
