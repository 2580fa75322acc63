//! Export log records to stdout.
//!
//! Each record is written as one human-readable block. The writer defaults
//! to [`std::io::Stdout`] and can be replaced by any [`std::io::Write`]
//! implementation, such as a file or an in-memory buffer.
//!
//! # Examples
//!
//! ```no_run
//! use otel_logs::logs::{AnyValue, LogRecord, Logger, LoggerProvider, Severity};
//! use otel_logs_sdk::logs::SdkLoggerProvider;
//!
//! let exporter = otel_logs_stdout::LogExporter::default();
//! let provider = SdkLoggerProvider::builder()
//!     .with_simple_exporter(exporter)
//!     .build();
//!
//! let logger = provider.logger("stdout-example");
//! let mut record = logger.create_log_record();
//! record.set_severity_number(Severity::Info);
//! record.set_body(AnyValue::from("hello"));
//! logger.emit(record);
//!
//! // {
//! //   timestamp          :
//! //   observed_timestamp : 2024-05-01 10:00:00.000000
//! //   severity_num       : Info
//! //   ..
//!
//! provider.shutdown().unwrap();
//! ```
#![warn(missing_debug_implementations, missing_docs)]

mod logs;
pub use logs::*;
