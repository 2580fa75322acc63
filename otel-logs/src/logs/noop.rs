use std::{borrow::Cow, time::SystemTime};

use crate::{
    logs::{AnyValue, LogRecord, Logger, LoggerProvider, Severity},
    InstrumentationScope, Key, SpanId, TraceFlags, TraceId,
};

/// A no-op implementation of a [`LoggerProvider`].
#[derive(Clone, Debug, Default)]
pub struct NoopLoggerProvider(());

impl NoopLoggerProvider {
    /// Create a new no-op logger provider.
    pub fn new() -> Self {
        NoopLoggerProvider(())
    }
}

impl LoggerProvider for NoopLoggerProvider {
    type Logger = NoopLogger;

    fn logger_with_scope(&self, scope: InstrumentationScope) -> Self::Logger {
        NoopLogger { scope }
    }
}

#[derive(Debug, Clone, Default)]
/// A no-operation log record that implements the LogRecord trait.
pub struct NoopLogRecord;

impl LogRecord for NoopLogRecord {
    fn set_timestamp(&mut self, _timestamp: SystemTime) {}
    fn set_observed_timestamp(&mut self, _timestamp: SystemTime) {}
    fn set_trace_context(
        &mut self,
        _trace_id: TraceId,
        _span_id: SpanId,
        _trace_flags: Option<TraceFlags>,
    ) {
    }
    fn set_severity_text(&mut self, _text: Cow<'static, str>) {}
    fn set_severity_number(&mut self, _number: Severity) {}
    fn set_body(&mut self, _body: AnyValue) {}
    fn set_attribute<K, V>(&mut self, _key: K, _value: V)
    where
        K: Into<Key>,
        V: Into<AnyValue>,
    {
    }
}

/// A no-op implementation of a [`Logger`]. It keeps its name so wrappers
/// relying on [`Logger::name`] still behave.
#[derive(Clone, Debug)]
pub struct NoopLogger {
    scope: InstrumentationScope,
}

impl Logger for NoopLogger {
    type LogRecord = NoopLogRecord;

    fn name(&self) -> &str {
        self.scope.name()
    }

    fn create_log_record(&self) -> Self::LogRecord {
        NoopLogRecord {}
    }

    fn emit(&self, _record: Self::LogRecord) {}
}
