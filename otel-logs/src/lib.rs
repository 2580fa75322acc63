//! Logs bridge API.
//!
//! This crate defines the traits and value types used to produce structured
//! log records: [`logs::Logger`], [`logs::LogRecord`], [`logs::AnyValue`],
//! [`logs::Severity`] and the event convention built on top of them
//! ([`logs::EventLogger`]). It does not process or export anything by
//! itself; the `otel-logs-sdk` crate provides processors and exporters, and
//! `otel-logs-stdout` provides a human-readable stream exporter.
//!
//! ## Emitting a record
//!
//! ```
//! use otel_logs::logs::{AnyValue, LogRecord, Logger, LoggerProvider, NoopLoggerProvider, Severity};
//!
//! let provider = NoopLoggerProvider::new();
//! let logger = provider.logger("my-app");
//!
//! let mut record = logger.create_log_record();
//! record.set_severity_number(Severity::Info);
//! record.set_body(AnyValue::from("hello"));
//! record.set_attribute("user.id", 42);
//! logger.emit(record);
//! ```
//!
//! ## Internal diagnostics
//!
//! The `otel_debug!`, `otel_info!`, `otel_warn!` and `otel_error!` macros are
//! used by processors and exporters to report their own failures. With the
//! `internal-logs` feature they are forwarded to [`tracing`], so installing a
//! `tracing-subscriber` makes them visible.
//!
//! [`tracing`]: https://docs.rs/tracing
#![warn(
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    unreachable_pub,
    unused
)]
#![cfg_attr(docsrs, feature(doc_cfg), deny(rustdoc::broken_intra_doc_links))]

mod common;
mod internal_logging;
mod trace_context;

pub mod logs;

pub use common::{InstrumentationScope, InstrumentationScopeBuilder, Key, KeyValue};
pub use trace_context::{SpanId, TraceFlags, TraceId};

#[doc(hidden)]
#[cfg(feature = "internal-logs")]
pub mod _private {
    pub use tracing::{debug, error, info, warn};
}
