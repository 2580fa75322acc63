use otel_logs::logs::{
    AnyValue, EventLogger, EventLoggerProvider, LogRecord, Logger, EVENT_DOMAIN, EVENT_NAME,
};
use std::{borrow::Cow, fmt, sync::Arc};

/// An [`EventLogger`] that tags records with the event domain and name,
/// then forwards them to a delegate [`Logger`].
///
/// The delegate is shared: several event loggers (and plain callers) may
/// hold the same logger.
///
/// `event.domain` and `event.name` are appended like any other attribute.
/// If the record already carries either key, the earlier entry is kept and
/// the tagged value follows it, so exporters see both.
///
/// ```
/// # #[cfg(feature = "testing")]
/// # {
/// use std::sync::Arc;
/// use otel_logs::logs::{EventLogger, EventLoggerProvider, LoggerProvider};
/// use otel_logs_sdk::logs::{InMemoryLogExporter, SdkEventLoggerProvider, SdkLoggerProvider};
///
/// let provider = SdkLoggerProvider::builder()
///     .with_simple_exporter(InMemoryLogExporter::default())
///     .build();
/// let logger = Arc::new(provider.logger("ui-lib"));
///
/// let events = SdkEventLoggerProvider::new().event_logger(logger, "ui");
/// let record = events.create_event_record();
/// events.emit_event("click", record);
/// assert_eq!(events.name(), "ui-lib");
/// # }
/// ```
pub struct SdkEventLogger<L: Logger> {
    delegate: Arc<L>,
    event_domain: Cow<'static, str>,
}

impl<L: Logger> SdkEventLogger<L> {
    /// Creates an event logger emitting events of `event_domain` through
    /// `delegate`.
    pub fn new(delegate: Arc<L>, event_domain: impl Into<Cow<'static, str>>) -> Self {
        SdkEventLogger {
            delegate,
            event_domain: event_domain.into(),
        }
    }

    /// Returns the domain attached to every event.
    pub fn event_domain(&self) -> &str {
        &self.event_domain
    }
}

impl<L: Logger> fmt::Debug for SdkEventLogger<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SdkEventLogger")
            .field("name", &self.delegate.name())
            .field("event_domain", &self.event_domain)
            .finish()
    }
}

impl<L: Logger> EventLogger for SdkEventLogger<L> {
    type Logger = L;

    fn name(&self) -> &str {
        self.delegate.name()
    }

    fn delegate_logger(&self) -> Arc<L> {
        Arc::clone(&self.delegate)
    }

    fn emit_event(&self, event_name: &str, mut record: L::LogRecord) {
        record.set_attribute(EVENT_DOMAIN, self.event_domain.clone());
        record.set_attribute(EVENT_NAME, AnyValue::from(event_name.to_owned()));
        self.delegate.emit(record);
    }
}

/// Creates [`SdkEventLogger`]s.
#[derive(Debug, Clone, Default)]
pub struct SdkEventLoggerProvider {
    _private: (),
}

impl SdkEventLoggerProvider {
    /// Create a new event logger provider.
    pub fn new() -> Self {
        SdkEventLoggerProvider::default()
    }
}

impl EventLoggerProvider for SdkEventLoggerProvider {
    type EventLogger<L: Logger> = SdkEventLogger<L>;

    fn event_logger<L: Logger>(
        &self,
        delegate_logger: Arc<L>,
        event_domain: impl Into<Cow<'static, str>>,
    ) -> SdkEventLogger<L> {
        SdkEventLogger::new(delegate_logger, event_domain)
    }
}
