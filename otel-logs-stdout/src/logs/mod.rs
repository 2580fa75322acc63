//! # Stdout Log Exporter
//!
//! The stdout [`LogExporter`] writes one readable block per [`SdkLogRecord`]
//! to its configured [`Write`] instance. By default it will write to [`Stdout`].
//!
//! [`SdkLogRecord`]: otel_logs_sdk::logs::SdkLogRecord
//! [`Write`]: std::io::Write
//! [`Stdout`]: std::io::Stdout
mod exporter;
mod format;

pub use exporter::{LogExporter, LogExporterBuilder};
