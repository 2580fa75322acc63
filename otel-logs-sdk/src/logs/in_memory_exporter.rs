use crate::error::{OTelSdkError, OTelSdkResult};
use crate::logs::{LogBatch, LogExporter, SdkLogRecord};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

type LogResult<T> = Result<T, OTelSdkError>;

/// An in-memory logs exporter that stores exported records in memory.
///
/// This exporter is useful for testing and debugging purposes. Clones share
/// the same storage, so a test can keep one handle while the pipeline owns
/// another. Records can be retrieved with
/// [`get_emitted_logs`](InMemoryLogExporter::get_emitted_logs).
///
/// # Example
/// ```
/// use otel_logs::logs::{AnyValue, LogRecord, Logger, LoggerProvider};
/// use otel_logs_sdk::logs::{InMemoryLogExporter, SdkLoggerProvider};
///
/// let exporter = InMemoryLogExporter::default();
/// let provider = SdkLoggerProvider::builder()
///     .with_simple_exporter(exporter.clone())
///     .build();
///
/// let logger = provider.logger("example");
/// let mut record = logger.create_log_record();
/// record.set_body(AnyValue::from("hello"));
/// logger.emit(record);
///
/// let emitted_logs = exporter.get_emitted_logs().unwrap();
/// assert_eq!(emitted_logs[0].body(), Some(&AnyValue::from("hello")));
/// ```
#[derive(Clone, Debug)]
pub struct InMemoryLogExporter {
    logs: Arc<Mutex<Vec<SdkLogRecord>>>,
    shutdown_called: Arc<AtomicBool>,
    should_reset_on_shutdown: bool,
}

impl Default for InMemoryLogExporter {
    fn default() -> Self {
        InMemoryLogExporterBuilder::new().build()
    }
}

/// Builder for [`InMemoryLogExporter`].
#[derive(Debug, Clone)]
pub struct InMemoryLogExporterBuilder {
    reset_on_shutdown: bool,
}

impl Default for InMemoryLogExporterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLogExporterBuilder {
    /// Creates a new builder. By default the stored records are cleared on
    /// shutdown.
    pub fn new() -> Self {
        Self {
            reset_on_shutdown: true,
        }
    }

    /// Creates a new instance of `InMemoryLogExporter`.
    pub fn build(&self) -> InMemoryLogExporter {
        InMemoryLogExporter {
            logs: Arc::new(Mutex::new(Vec::new())),
            shutdown_called: Arc::new(AtomicBool::new(false)),
            should_reset_on_shutdown: self.reset_on_shutdown,
        }
    }

    /// If set, the records will not be [`InMemoryLogExporter::reset`] on shutdown.
    pub fn keep_records_on_shutdown(self) -> Self {
        Self {
            reset_on_shutdown: false,
        }
    }
}

impl InMemoryLogExporter {
    /// Returns a copy of every record exported so far, in export order.
    pub fn get_emitted_logs(&self) -> LogResult<Vec<SdkLogRecord>> {
        let logs_guard = self
            .logs
            .lock()
            .map_err(|e| OTelSdkError::InternalFailure(format!("Failed to lock logs: {e}")))?;
        Ok(logs_guard.clone())
    }

    /// Clears the internal (in-memory) storage of logs.
    pub fn reset(&self) {
        if let Ok(mut logs_guard) = self.logs.lock() {
            logs_guard.clear();
        }
    }

    /// Returns `true` once shutdown has been called on any clone of this
    /// exporter.
    pub fn is_shutdown_called(&self) -> bool {
        self.shutdown_called.load(Ordering::SeqCst)
    }
}

impl LogExporter for InMemoryLogExporter {
    type Recordable = SdkLogRecord;

    fn make_recordable(&self) -> SdkLogRecord {
        SdkLogRecord::new()
    }

    fn export(&self, batch: LogBatch<SdkLogRecord>) -> OTelSdkResult {
        let mut logs_guard = self.logs.lock().map_err(|e| {
            OTelSdkError::InternalFailure(format!("Failed to lock logs for export: {e}"))
        })?;
        if self.shutdown_called.load(Ordering::SeqCst) {
            return Err(OTelSdkError::AlreadyShutdown);
        }
        logs_guard.extend(batch);
        Ok(())
    }

    fn shutdown_with_timeout(&self, _timeout: Duration) -> OTelSdkResult {
        self.shutdown_called.store(true, Ordering::SeqCst);
        if self.should_reset_on_shutdown {
            self.reset();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use otel_logs::logs::{AnyValue, LogRecord};

    fn record(body: &'static str) -> SdkLogRecord {
        let mut record = SdkLogRecord::new();
        record.set_body(AnyValue::from(body));
        record
    }

    #[test]
    fn clones_share_storage() {
        let exporter = InMemoryLogExporter::default();
        let handle = exporter.clone();

        exporter
            .export(LogBatch::new(vec![record("a"), record("b")]))
            .unwrap();

        let bodies: Vec<_> = handle
            .get_emitted_logs()
            .unwrap()
            .iter()
            .filter_map(|r| r.body().and_then(AnyValue::as_str).map(str::to_owned))
            .collect();
        assert_eq!(bodies, ["a", "b"]);

        handle.reset();
        assert!(exporter.get_emitted_logs().unwrap().is_empty());
    }

    #[test]
    fn shutdown_resets_by_default() {
        let exporter = InMemoryLogExporter::default();
        exporter.export(LogBatch::single(record("a"))).unwrap();
        exporter.shutdown().unwrap();

        assert!(exporter.is_shutdown_called());
        assert!(exporter.get_emitted_logs().unwrap().is_empty());
    }

    #[test]
    fn keep_records_on_shutdown() {
        let exporter = InMemoryLogExporterBuilder::default()
            .keep_records_on_shutdown()
            .build();
        exporter.export(LogBatch::single(record("a"))).unwrap();
        exporter.shutdown().unwrap();

        assert!(exporter.is_shutdown_called());
        assert_eq!(exporter.get_emitted_logs().unwrap().len(), 1);
    }

    #[test]
    fn export_after_shutdown_is_rejected() {
        let exporter = InMemoryLogExporterBuilder::default()
            .keep_records_on_shutdown()
            .build();
        exporter.export(LogBatch::single(record("before"))).unwrap();
        exporter.shutdown().unwrap();

        let result = exporter.export(LogBatch::single(record("after")));

        assert_eq!(result, Err(OTelSdkError::AlreadyShutdown));
        let logs = exporter.get_emitted_logs().unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].body(), Some(&AnyValue::from("before")));
    }
}
