//! Log exporters
use crate::error::OTelSdkResult;
use crate::logs::Recordable;
use std::fmt::Debug;
use std::time::Duration;

/// A batch of log records handed to [`LogExporter::export`].
///
/// The batch owns its records; once a record is placed in a batch the
/// producer can no longer observe it.
#[derive(Debug)]
pub struct LogBatch<R> {
    records: Vec<R>,
}

impl<R> LogBatch<R> {
    /// Creates a batch from the given records.
    pub fn new(records: Vec<R>) -> Self {
        LogBatch { records }
    }

    /// Creates a batch holding exactly one record.
    pub fn single(record: R) -> Self {
        LogBatch {
            records: vec![record],
        }
    }

    /// Returns the number of records in the batch.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the batch holds no record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns an iterator over the records in the batch.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }
}

impl<R> IntoIterator for LogBatch<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a, R> IntoIterator for &'a LogBatch<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// `LogExporter` defines the interface that log exporters should implement.
///
/// An exporter sits at the end of a pipeline. It decides the concrete
/// representation of the records flowing through the pipeline (its
/// [`Recordable`] type) and writes batches of them to its destination.
///
/// An exporter is owned by exactly one processor, which serializes calls to
/// [`export`](LogExporter::export). Exporters still need to be `Sync`, since
/// flush and shutdown may be called from other threads while an export is in
/// flight.
pub trait LogExporter: Send + Sync + Debug {
    /// The record representation this exporter consumes.
    type Recordable: Recordable;

    /// Creates a new, empty record. Must not have side effects.
    fn make_recordable(&self) -> Self::Recordable;

    /// Exports a batch of records.
    ///
    /// Returns `Err(OTelSdkError::AlreadyShutdown)` without performing any
    /// I/O once the exporter has been shut down. Failures are reported for
    /// the whole batch; the exporter does not retry.
    ///
    /// [`OTelSdkError::AlreadyShutdown`]: crate::error::OTelSdkError::AlreadyShutdown
    fn export(&self, batch: LogBatch<Self::Recordable>) -> OTelSdkResult;

    /// Exports any data the exporter has buffered, waiting at most `timeout`.
    fn force_flush_with_timeout(&self, _timeout: Duration) -> OTelSdkResult {
        Ok(())
    }

    /// Same as [`force_flush_with_timeout`](LogExporter::force_flush_with_timeout)
    /// without a deadline.
    fn force_flush(&self) -> OTelSdkResult {
        self.force_flush_with_timeout(Duration::MAX)
    }

    /// Shuts down the exporter, waiting at most `timeout`.
    ///
    /// After this call every [`export`](LogExporter::export) fails. Calling
    /// it more than once has no further side effects.
    fn shutdown_with_timeout(&self, _timeout: Duration) -> OTelSdkResult {
        Ok(())
    }

    /// Same as [`shutdown_with_timeout`](LogExporter::shutdown_with_timeout)
    /// without a deadline.
    fn shutdown(&self) -> OTelSdkResult {
        self.shutdown_with_timeout(Duration::MAX)
    }
}
