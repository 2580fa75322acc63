//! # Logs Bridge API
//!
//!  This API is not intended to be called by application developers directly.
//!  It is provided for logging library authors to build log appenders that
//!  bridge existing logging systems into a log processing pipeline, and for
//!  instrumentation emitting named events through an [`EventLogger`].
mod event_logger;
mod logger;
mod noop;
mod record;

pub use event_logger::{EventLogger, EventLoggerProvider, EVENT_DOMAIN, EVENT_NAME};
pub use logger::{Logger, LoggerProvider};
pub use noop::{NoopLogRecord, NoopLogger, NoopLoggerProvider};
pub use record::{AnyValue, LogRecord, Severity};
