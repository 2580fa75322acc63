//! # Logs SDK
//!
//! Processing and export pipeline for records produced through the
//! `otel-logs` API.
//!
//! A record travels through three stages:
//!
//! ```ascii
//!   +-----------------+   +----------------+   +---------------+
//!   | Logger::emit()  +---> LogProcessor   +---> LogExporter   |
//!   +-----------------+   +----------------+   +---------------+
//! ```
//!
//! The exporter at the end of the chain decides the concrete record
//! representation (its [`logs::Recordable`] type). Processors forward
//! [`logs::LogProcessor::make_recordable`] to it, so whatever a producer fills
//! in arrives at the exporter without conversion.
//!
//! ## Getting started
//!
//! ```
//! # #[cfg(feature = "testing")]
//! # {
//! use otel_logs::logs::{AnyValue, LogRecord, Logger, LoggerProvider, Severity};
//! use otel_logs_sdk::logs::{InMemoryLogExporter, SdkLoggerProvider};
//!
//! let exporter = InMemoryLogExporter::default();
//! let provider = SdkLoggerProvider::builder()
//!     .with_simple_exporter(exporter.clone())
//!     .build();
//!
//! let logger = provider.logger("my-app");
//! let mut record = logger.create_log_record();
//! record.set_severity_number(Severity::Info);
//! record.set_body(AnyValue::from("hello"));
//! logger.emit(record);
//!
//! assert_eq!(exporter.get_emitted_logs().unwrap().len(), 1);
//! # }
//! ```
//!
//! ## Crate Feature Flags
//!
//! * `internal-logs`: forwards the SDK's own diagnostics to `tracing`
//!   (enabled by default).
//! * `testing`: exposes [`logs::InMemoryLogExporter`].
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

pub mod error;
pub mod logs;
pub mod resource;

pub use resource::Resource;
