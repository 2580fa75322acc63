//! # Log Processor Interface
//!
//! The `LogProcessor` interface sits between the SDK's `Logger` and a
//! `LogExporter`. Processors receive records emitted by loggers and decide
//! when and how they reach the exporter.
//!
//! The SDK ships the [`SimpleLogProcessor`], which forwards each record to
//! the exporter immediately, on the emitting thread.
//!
//! ## Diagram
//!
//! ```ascii
//!   +-----+---------------+   +-----------------------+   +-------------------+
//!   |     |               |   |                       |   |                   |
//!   | SDK | Logger.emit() +---> (Simple)LogProcessor  +--->  LogExporter      |
//!   +-----+---------------+   +-----------------------+   +-------------------+
//! ```
//!
//! [`SimpleLogProcessor`]: crate::logs::SimpleLogProcessor

use crate::error::OTelSdkResult;
use crate::logs::Recordable;

use std::fmt::Debug;
use std::time::Duration;

/// The interface for plugging into a [`SdkLogger`].
///
/// [`SdkLogger`]: crate::logs::SdkLogger
pub trait LogProcessor: Send + Sync + Debug {
    /// The record representation flowing through this processor.
    type Recordable: Recordable;

    /// Creates a new, empty record for a producer to fill in.
    ///
    /// Processors forward this to their exporter so that the record type
    /// matches what the exporter consumes.
    fn make_recordable(&self) -> Self::Recordable;

    /// Called when a record is ready to be processed and exported. The
    /// processor takes ownership of the record.
    ///
    /// Failures are not returned to the producer.
    fn on_emit(&self, record: Self::Recordable);

    /// Exports any buffered records, waiting at most `timeout`.
    fn force_flush_with_timeout(&self, timeout: Duration) -> OTelSdkResult;

    /// Same as [`force_flush_with_timeout`](LogProcessor::force_flush_with_timeout)
    /// without a deadline.
    fn force_flush(&self) -> OTelSdkResult {
        self.force_flush_with_timeout(Duration::MAX)
    }

    /// Shuts down the processor, waiting at most `timeout`.
    /// After shutdown returns the processor should stop processing any logs.
    fn shutdown_with_timeout(&self, timeout: Duration) -> OTelSdkResult;

    /// Same as [`shutdown_with_timeout`](LogProcessor::shutdown_with_timeout)
    /// without a deadline.
    fn shutdown(&self) -> OTelSdkResult {
        self.shutdown_with_timeout(Duration::MAX)
    }
}
