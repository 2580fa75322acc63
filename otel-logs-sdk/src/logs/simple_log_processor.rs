//! # Simple Log Processor
//! The `SimpleLogProcessor` is one implementation of the `LogProcessor` interface.
//!
//! It forwards each log record to the exporter as soon as it is emitted, in
//! the thread that emitted it. Nothing is buffered, so a slow exporter slows
//! down the producer. Use it for debugging, tests, or exporters writing to a
//! local stream.
//!
//! ## Diagram
//!
//! ```ascii
//!   +-----+---------------+   +-----------------------+   +-------------------+
//!   |     |               |   |                       |   |                   |
//!   | SDK | Logger.emit() +---> (Simple)LogProcessor  +--->  LogExporter      |
//!   +-----+---------------+   +-----------------------+   +-------------------+
//! ```

use crate::error::{OTelSdkError, OTelSdkResult};
use crate::logs::{LogBatch, LogExporter, LogProcessor};

use otel_logs::{otel_debug, otel_error};

use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// A [`LogProcessor`] that exports every record immediately, as a batch of
/// one, in the thread that emits it.
///
/// Exports issued through one processor never overlap: concurrent emitters
/// wait for each other. No ordering between concurrent emitters is
/// guaranteed beyond the order in which they acquire the export lock.
///
/// ## Example
///
/// ```rust
/// # #[cfg(feature = "testing")]
/// # {
/// use otel_logs_sdk::logs::{InMemoryLogExporter, SdkLoggerProvider, SimpleLogProcessor};
///
/// let exporter = InMemoryLogExporter::default(); // Replace with an actual exporter
/// let provider = SdkLoggerProvider::builder()
///     .with_log_processor(SimpleLogProcessor::new(exporter))
///     .build();
/// # }
/// ```
#[derive(Debug)]
pub struct SimpleLogProcessor<T: LogExporter> {
    exporter: T,
    export_lock: Mutex<()>,
    is_shutdown: AtomicBool,
}

impl<T: LogExporter> SimpleLogProcessor<T> {
    /// Creates a new instance of `SimpleLogProcessor`, taking ownership of
    /// `exporter`.
    pub fn new(exporter: T) -> Self {
        SimpleLogProcessor {
            exporter,
            export_lock: Mutex::new(()),
            is_shutdown: AtomicBool::new(false),
        }
    }
}

impl<T: LogExporter> LogProcessor for SimpleLogProcessor<T> {
    type Recordable = T::Recordable;

    fn make_recordable(&self) -> Self::Recordable {
        self.exporter.make_recordable()
    }

    fn on_emit(&self, record: Self::Recordable) {
        // noop after shutdown
        if self.is_shutdown.load(Ordering::Relaxed) {
            otel_debug!(
                name: "SimpleLogProcessor.Emit.ProcessorShutdown",
            );
            return;
        }

        let Ok(_guard) = self.export_lock.lock() else {
            // logging as debug as this is not a user error
            otel_debug!(
                name: "SimpleLogProcessor.Emit.MutexPoisoning",
                error = "export lock poisoned"
            );
            return;
        };
        // shutdown may have completed while waiting for the lock
        if self.is_shutdown.load(Ordering::SeqCst) {
            otel_debug!(
                name: "SimpleLogProcessor.Emit.ProcessorShutdown",
            );
            return;
        }
        if let Err(err) = self.exporter.export(LogBatch::single(record)) {
            otel_error!(
                name: "SimpleLogProcessor.Emit.ExportError",
                error = format!("{err}")
            );
        }
    }

    fn force_flush_with_timeout(&self, timeout: Duration) -> OTelSdkResult {
        self.exporter.force_flush_with_timeout(timeout)
    }

    fn shutdown_with_timeout(&self, timeout: Duration) -> OTelSdkResult {
        if self
            .is_shutdown
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            otel_debug!(
                name: "SimpleLogProcessor.Shutdown.AlreadyShutdown",
            );
            return Err(OTelSdkError::AlreadyShutdown);
        }
        otel_debug!(
            name: "SimpleLogProcessor.Shutdown",
        );
        // Wait for an in-flight export. A poisoned lock guards no data, so it
        // does not prevent the exporter from being shut down.
        let _guard = self
            .export_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        self.exporter.shutdown_with_timeout(timeout)
    }
}
