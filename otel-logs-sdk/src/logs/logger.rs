use super::{Recordable, SdkLogRecord, SdkLoggerProvider};
use otel_logs::logs::Logger;
use otel_logs::InstrumentationScope;
use std::time::SystemTime;

/// The object for emitting [`LogRecord`]s.
///
/// Records are created by the provider's processor (and thereby by the
/// exporter at the end of the pipeline), then stamped with the observed
/// timestamp, the provider's resource and this logger's instrumentation
/// scope.
///
/// [`LogRecord`]: otel_logs::logs::LogRecord
#[derive(Debug)]
pub struct SdkLogger<R: Recordable = SdkLogRecord> {
    scope: InstrumentationScope,
    provider: SdkLoggerProvider<R>,
}

impl<R: Recordable> SdkLogger<R> {
    pub(crate) fn new(scope: InstrumentationScope, provider: SdkLoggerProvider<R>) -> Self {
        SdkLogger { scope, provider }
    }

    /// Returns the instrumentation scope of this logger.
    pub fn instrumentation_scope(&self) -> &InstrumentationScope {
        &self.scope
    }
}

impl<R: Recordable> Clone for SdkLogger<R> {
    fn clone(&self) -> Self {
        SdkLogger {
            scope: self.scope.clone(),
            provider: self.provider.clone(),
        }
    }
}

impl<R: Recordable> Logger for SdkLogger<R> {
    type LogRecord = R;

    fn name(&self) -> &str {
        self.scope.name()
    }

    fn create_log_record(&self) -> Self::LogRecord {
        let mut record = self.provider.log_processor().make_recordable();
        record.set_observed_timestamp(SystemTime::now());
        record.set_resource(self.provider.resource());
        record.set_instrumentation_scope(&self.scope);
        record
    }

    /// Emit a `LogRecord`.
    fn emit(&self, record: Self::LogRecord) {
        self.provider.log_processor().on_emit(record);
    }
}
