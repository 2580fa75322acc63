//! Errors returned by processor and exporter lifecycle operations.
use std::time::Duration;
use thiserror::Error;

/// Errors returned by `export`, `force_flush` and `shutdown`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OTelSdkError {
    /// Shutdown has already been invoked.
    ///
    /// Returned when an operation is attempted on a component that was shut
    /// down, or when shutdown is called a second time. Receiving this error
    /// is mostly harmless; it usually points at a lifecycle mix-up in the
    /// calling code.
    #[error("Shutdown already invoked")]
    AlreadyShutdown,

    /// The operation did not complete within the given time.
    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),

    /// The operation failed for a reason not covered above, for example an
    /// I/O error on the output stream or a poisoned lock.
    #[error("Operation failed: {0}")]
    InternalFailure(String),
}

/// A specialized `Result` type for lifecycle operations.
pub type OTelSdkResult = Result<(), OTelSdkError>;
