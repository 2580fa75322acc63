use std::borrow::Cow;

use crate::{logs::LogRecord, InstrumentationScope};

/// The interface for emitting [`LogRecord`]s.
pub trait Logger {
    /// Specifies the `LogRecord` type associated with this logger.
    type LogRecord: LogRecord;

    /// Returns the name this logger was created with.
    fn name(&self) -> &str;

    /// Creates a new, empty log record to be populated and then passed to
    /// [`Logger::emit`].
    fn create_log_record(&self) -> Self::LogRecord;

    /// Emit a [`LogRecord`], transferring its ownership to the logger.
    fn emit(&self, record: Self::LogRecord);
}

/// Interfaces that can create [`Logger`] instances.
pub trait LoggerProvider {
    /// The [`Logger`] type that this provider will return.
    type Logger: Logger;

    /// Returns a new logger with the given instrumentation scope.
    ///
    /// # Examples
    ///
    /// ```
    /// use otel_logs::InstrumentationScope;
    /// use otel_logs::logs::{Logger, LoggerProvider, NoopLoggerProvider};
    ///
    /// let provider = NoopLoggerProvider::new();
    ///
    /// // logger used in applications/binaries
    /// let logger = provider.logger("my_app");
    ///
    /// // logger used in libraries/crates that optionally includes version and schema url
    /// let scope = InstrumentationScope::builder(env!("CARGO_PKG_NAME"))
    ///     .with_version(env!("CARGO_PKG_VERSION"))
    ///     .with_schema_url("https://opentelemetry.io/schema/1.0.0")
    ///     .build();
    ///
    /// let logger = provider.logger_with_scope(scope);
    /// assert_eq!(logger.name(), "otel-logs");
    /// ```
    fn logger_with_scope(&self, scope: InstrumentationScope) -> Self::Logger;

    /// Returns a new logger with the given name.
    ///
    /// The `name` should be the application name or the name of the library
    /// providing instrumentation.
    fn logger(&self, name: impl Into<Cow<'static, str>>) -> Self::Logger {
        let scope = InstrumentationScope::builder(name).build();
        self.logger_with_scope(scope)
    }
}
