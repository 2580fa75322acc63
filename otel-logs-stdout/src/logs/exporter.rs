use crate::logs::format::RecordBlock;
use core::fmt;
use otel_logs::otel_debug;
use otel_logs_sdk::error::{OTelSdkError, OTelSdkResult};
use otel_logs_sdk::logs::{LogBatch, SdkLogRecord};
use std::fmt::Write as _;
use std::io::{self, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// An exporter that writes each record as a readable block to stdout, or to
/// any other [`Write`] implementation.
///
/// All blocks of a batch are rendered first and then written while holding
/// the writer lock, so concurrent exports never interleave their output.
pub struct LogExporter<W = Stdout> {
    writer: Mutex<W>,
    is_shutdown: AtomicBool,
}

impl LogExporter {
    /// Returns a builder for an exporter writing to stdout.
    pub fn builder() -> LogExporterBuilder {
        LogExporterBuilder::default()
    }
}

impl Default for LogExporter {
    fn default() -> Self {
        LogExporterBuilder::default().build()
    }
}

impl<W> fmt::Debug for LogExporter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogExporter")
            .field("is_shutdown", &self.is_shutdown.load(Ordering::Relaxed))
            .finish()
    }
}

impl<W> LogExporter<W>
where
    W: Write,
{
    fn write_locked(&self, output: &str) -> io::Result<bool> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| io::Error::other("stdout exporter writer lock poisoned"))?;
        // A shutdown that won the lock first discards this batch.
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Ok(false);
        }
        writer.write_all(output.as_bytes())?;
        writer.flush()?;
        Ok(true)
    }
}

impl<W> otel_logs_sdk::logs::LogExporter for LogExporter<W>
where
    W: Write + Send + fmt::Debug,
{
    type Recordable = SdkLogRecord;

    fn make_recordable(&self) -> SdkLogRecord {
        SdkLogRecord::new()
    }

    fn export(&self, batch: LogBatch<SdkLogRecord>) -> OTelSdkResult {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Err(OTelSdkError::AlreadyShutdown);
        }

        let mut output = String::new();
        for record in &batch {
            write!(output, "{}", RecordBlock(record))
                .map_err(|err| OTelSdkError::InternalFailure(err.to_string()))?;
        }

        match self.write_locked(&output) {
            Ok(true) => Ok(()),
            Ok(false) => Err(OTelSdkError::AlreadyShutdown),
            Err(err) => Err(OTelSdkError::InternalFailure(format!(
                "failed to write log records: {err}"
            ))),
        }
    }

    fn shutdown_with_timeout(&self, timeout: Duration) -> OTelSdkResult {
        let start = Instant::now();
        if self.is_shutdown.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        let flushed = match self.writer.lock() {
            Ok(mut writer) => writer.flush(),
            Err(_) => Err(io::Error::other("stdout exporter writer lock poisoned")),
        };
        if let Err(err) = flushed {
            otel_debug!(
                name: "StdoutLogExporter.Shutdown.FlushFailed",
                error = format!("{err}")
            );
        }

        if start.elapsed() > timeout {
            return Err(OTelSdkError::Timeout(timeout));
        }
        Ok(())
    }
}

/// Configures a stdout [`LogExporter`].
#[derive(Debug)]
pub struct LogExporterBuilder<W = Stdout> {
    writer: W,
}

impl Default for LogExporterBuilder {
    fn default() -> Self {
        LogExporterBuilder {
            writer: io::stdout(),
        }
    }
}

impl<W> LogExporterBuilder<W> {
    /// Replaces the destination of the exported records.
    pub fn with_writer<T>(self, writer: T) -> LogExporterBuilder<T>
    where
        T: Write + Send + fmt::Debug,
    {
        LogExporterBuilder { writer }
    }

    /// Creates the exporter.
    pub fn build(self) -> LogExporter<W> {
        LogExporter {
            writer: Mutex::new(self.writer),
            is_shutdown: AtomicBool::new(false),
        }
    }
}
