use super::{LogProcessor, Recordable, SdkLogRecord, SdkLogger, SimpleLogProcessor};
use crate::error::{OTelSdkError, OTelSdkResult};
use crate::logs::LogExporter;
use crate::Resource;
use otel_logs::{logs::LoggerProvider, otel_debug, otel_info, InstrumentationScope};
use std::{
    fmt,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

/// Handles the creation and coordination of [`Logger`]s.
///
/// All `Logger`s created by a `SdkLoggerProvider` share the same
/// [`Resource`] and hand their records to the provider's log processor. The
/// record type `R` is the one produced by that processor.
///
/// This is a clonable handle: cloning it creates a new reference, not a new
/// provider. Dropping the last reference shuts the processor down, unless
/// [`shutdown`](SdkLoggerProvider::shutdown) was already called.
///
/// [`Logger`]: otel_logs::logs::Logger
pub struct SdkLoggerProvider<R: Recordable = SdkLogRecord> {
    inner: Arc<LoggerProviderInner<R>>,
}

impl<R: Recordable> Clone for SdkLoggerProvider<R> {
    fn clone(&self) -> Self {
        SdkLoggerProvider {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Recordable> fmt::Debug for SdkLoggerProvider<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SdkLoggerProvider")
            .field("processor", &self.inner.processor)
            .field("resource", &self.inner.resource)
            .field("is_shutdown", &self.inner.is_shutdown)
            .finish()
    }
}

impl<R: Recordable> LoggerProvider for SdkLoggerProvider<R> {
    type Logger = SdkLogger<R>;

    fn logger_with_scope(&self, scope: InstrumentationScope) -> Self::Logger {
        if self.inner.is_shutdown.load(Ordering::Relaxed) {
            otel_debug!(
                name: "LoggerProvider.LoggerAfterShutdown",
                logger_name = scope.name(),
                message = "Records emitted through this logger will be dropped."
            );
        }
        if scope.name().is_empty() {
            otel_info!(name: "LoggerNameEmpty",  message = "Logger name is empty; consider providing a meaningful name. Logger will function normally and the provided name will be used as-is.");
        };
        otel_debug!(
            name: "LoggerProvider.NewLoggerReturned",
            logger_name = scope.name(),
        );
        SdkLogger::new(scope, self.clone())
    }
}

impl SdkLoggerProvider {
    /// Create a new `LoggerProvider` builder.
    pub fn builder() -> LoggerProviderBuilder {
        LoggerProviderBuilder::default()
    }
}

impl<R: Recordable> SdkLoggerProvider<R> {
    pub(crate) fn log_processor(&self) -> &dyn LogProcessor<Recordable = R> {
        self.inner.processor.as_ref()
    }

    pub(crate) fn resource(&self) -> &Resource {
        &self.inner.resource
    }

    /// Force flush all remaining logs in the log processor.
    pub fn force_flush(&self) -> OTelSdkResult {
        self.force_flush_with_timeout(Duration::MAX)
    }

    /// Same as [`force_flush`](SdkLoggerProvider::force_flush), waiting at
    /// most `timeout` for the processor.
    pub fn force_flush_with_timeout(&self, timeout: Duration) -> OTelSdkResult {
        self.inner.processor.force_flush_with_timeout(timeout)
    }

    /// Shuts down this `LoggerProvider` and its processor.
    ///
    /// Only the first call reaches the processor; later calls return
    /// [`OTelSdkError::AlreadyShutdown`].
    pub fn shutdown(&self) -> OTelSdkResult {
        self.shutdown_with_timeout(Duration::MAX)
    }

    /// Same as [`shutdown`](SdkLoggerProvider::shutdown), waiting at most
    /// `timeout` for the processor.
    pub fn shutdown_with_timeout(&self, timeout: Duration) -> OTelSdkResult {
        otel_debug!(
            name: "LoggerProvider.ShutdownInvokedByUser",
        );
        if self
            .inner
            .is_shutdown
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            self.inner.shutdown(timeout)
        } else {
            Err(OTelSdkError::AlreadyShutdown)
        }
    }
}

struct LoggerProviderInner<R: Recordable> {
    processor: Box<dyn LogProcessor<Recordable = R>>,
    resource: Resource,
    is_shutdown: AtomicBool,
}

impl<R: Recordable> LoggerProviderInner<R> {
    fn shutdown(&self, timeout: Duration) -> OTelSdkResult {
        let result = self.processor.shutdown_with_timeout(timeout);
        if let Err(err) = &result {
            // Log at debug level because:
            //  - The error is also returned to the user for handling (if applicable)
            //  - Or the error occurs during `LoggerProviderInner::Drop` as part of telemetry shutdown,
            //    which is non-actionable by the user
            otel_debug!(name: "LoggerProvider.ShutdownError",
                    error = format!("{err}"));
        }
        result
    }
}

impl<R: Recordable> Drop for LoggerProviderInner<R> {
    fn drop(&mut self) {
        if !self.is_shutdown.swap(true, Ordering::SeqCst) {
            otel_info!(
                name: "LoggerProvider.Drop",
                message = "Last reference of LoggerProvider dropped, initiating shutdown."
            );
            let _ = self.shutdown(Duration::MAX); // errors are handled within shutdown
        } else {
            otel_debug!(
                name: "LoggerProvider.Drop.AlreadyShutdown",
                message = "LoggerProvider was already shut down; drop will not attempt shutdown again."
            );
        }
    }
}

/// Builder for [`SdkLoggerProvider`].
///
/// A provider owns exactly one log processor, so the processor (or the
/// exporter wrapped in a [`SimpleLogProcessor`]) is configured once. The
/// type parameter tracks that choice.
#[derive(Debug)]
pub struct LoggerProviderBuilder<P = ()> {
    processor: P,
    resource: Option<Resource>,
}

impl Default for LoggerProviderBuilder {
    fn default() -> Self {
        LoggerProviderBuilder {
            processor: (),
            resource: None,
        }
    }
}

impl LoggerProviderBuilder {
    /// Uses a [SimpleLogProcessor] wrapping `exporter`.
    pub fn with_simple_exporter<T: LogExporter + 'static>(
        self,
        exporter: T,
    ) -> LoggerProviderBuilder<SimpleLogProcessor<T>> {
        self.with_log_processor(SimpleLogProcessor::new(exporter))
    }

    /// Uses a custom [LogProcessor].
    pub fn with_log_processor<T: LogProcessor + 'static>(
        self,
        processor: T,
    ) -> LoggerProviderBuilder<T> {
        LoggerProviderBuilder {
            processor,
            resource: self.resource,
        }
    }
}

impl<P> LoggerProviderBuilder<P> {
    /// The `Resource` to be associated with this Provider.
    ///
    /// When not set, [`Resource::builder`] detection is used.
    pub fn with_resource(self, resource: Resource) -> Self {
        LoggerProviderBuilder {
            resource: Some(resource),
            ..self
        }
    }
}

impl<P: LogProcessor + 'static> LoggerProviderBuilder<P> {
    /// Create a new provider from this configuration.
    pub fn build(self) -> SdkLoggerProvider<P::Recordable> {
        let resource = self
            .resource
            .unwrap_or_else(|| Resource::builder().build());

        let logger_provider = SdkLoggerProvider {
            inner: Arc::new(LoggerProviderInner {
                processor: Box::new(self.processor),
                resource,
                is_shutdown: AtomicBool::new(false),
            }),
        };

        otel_debug!(
            name: "LoggerProvider.Built",
        );
        logger_provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logs::InMemoryLogExporter;
    use crate::resource::SERVICE_NAME;
    use otel_logs::logs::{AnyValue, LogRecord, Logger};
    use otel_logs::{Key, KeyValue};
    use std::sync::atomic::AtomicU64;
    use std::sync::Mutex;
    use std::thread;

    #[derive(Debug)]
    struct ShutdownTestLogProcessor {
        is_shutdown: AtomicBool,
        counter: Arc<AtomicU64>,
        shutdown_calls: Arc<AtomicU64>,
    }

    impl ShutdownTestLogProcessor {
        fn new(counter: Arc<AtomicU64>, shutdown_calls: Arc<AtomicU64>) -> Self {
            ShutdownTestLogProcessor {
                is_shutdown: AtomicBool::new(false),
                counter,
                shutdown_calls,
            }
        }
    }

    impl LogProcessor for ShutdownTestLogProcessor {
        type Recordable = SdkLogRecord;

        fn make_recordable(&self) -> SdkLogRecord {
            SdkLogRecord::new()
        }

        fn on_emit(&self, _record: SdkLogRecord) {
            if !self.is_shutdown.load(Ordering::SeqCst) {
                self.counter.fetch_add(1, Ordering::SeqCst);
            }
        }

        fn force_flush_with_timeout(&self, _timeout: Duration) -> OTelSdkResult {
            Ok(())
        }

        fn shutdown_with_timeout(&self, _timeout: Duration) -> OTelSdkResult {
            self.is_shutdown.store(true, Ordering::SeqCst);
            self.shutdown_calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_logger_provider_default_resource() {
        let assert_resource = |provider: &SdkLoggerProvider, key: &'static str, value: &str| {
            assert_eq!(
                provider.resource().get(&Key::from_static_str(key)),
                Some(AnyValue::from(value.to_owned()))
            );
        };

        temp_env::with_vars_unset(["OTEL_SERVICE_NAME", "OTEL_RESOURCE_ATTRIBUTES"], || {
            let default_config = SdkLoggerProvider::builder()
                .with_simple_exporter(InMemoryLogExporter::default())
                .build();
            assert_resource(&default_config, SERVICE_NAME, "unknown_service");
        });

        temp_env::with_var(
            "OTEL_RESOURCE_ATTRIBUTES",
            Some("key1=value1, k2=value2"),
            || {
                let env_resource = SdkLoggerProvider::builder()
                    .with_simple_exporter(InMemoryLogExporter::default())
                    .build();
                assert_resource(&env_resource, "key1", "value1");
                assert_resource(&env_resource, "k2", "value2");
            },
        );

        let custom_config = SdkLoggerProvider::builder()
            .with_resource(
                Resource::builder_empty()
                    .with_service_name("test_service")
                    .with_attribute(KeyValue::new("test_key", "test_value"))
                    .build(),
            )
            .with_simple_exporter(InMemoryLogExporter::default())
            .build();
        assert_resource(&custom_config, SERVICE_NAME, "test_service");
        assert_resource(&custom_config, "test_key", "test_value");
        assert_eq!(custom_config.resource().len(), 2);
    }

    #[test]
    fn shutdown_test() {
        let counter = Arc::new(AtomicU64::new(0));
        let shutdown_calls = Arc::new(AtomicU64::new(0));
        let logger_provider = SdkLoggerProvider::builder()
            .with_log_processor(ShutdownTestLogProcessor::new(
                counter.clone(),
                shutdown_calls.clone(),
            ))
            .build();

        let logger1 = logger_provider.logger("test-logger1");
        let logger2 = logger_provider.logger("test-logger2");
        logger1.emit(logger1.create_log_record());
        logger2.emit(logger1.create_log_record());

        let logger3 = logger_provider.logger("test-logger3");
        let handle = thread::spawn(move || {
            logger3.emit(logger3.create_log_record());
        });
        handle.join().expect("thread panicked");

        assert_eq!(logger_provider.shutdown(), Ok(()));
        assert_eq!(
            logger_provider.shutdown(),
            Err(OTelSdkError::AlreadyShutdown)
        );

        // records emitted after shutdown are dropped by the processor
        logger1.emit(logger1.create_log_record());
        logger2.emit(logger2.create_log_record());

        assert_eq!(counter.load(Ordering::SeqCst), 3);
        assert_eq!(shutdown_calls.load(Ordering::SeqCst), 1);

        // dropping the last reference does not shut down a second time
        drop(logger1);
        drop(logger2);
        drop(logger_provider);
        assert_eq!(shutdown_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn drop_of_last_handle_shuts_down() {
        let counter = Arc::new(AtomicU64::new(0));
        let shutdown_calls = Arc::new(AtomicU64::new(0));
        let logger_provider = SdkLoggerProvider::builder()
            .with_log_processor(ShutdownTestLogProcessor::new(
                counter.clone(),
                shutdown_calls.clone(),
            ))
            .build();

        let clone = logger_provider.clone();
        let logger = logger_provider.logger("test-logger");
        drop(logger_provider);
        drop(clone);
        assert_eq!(shutdown_calls.load(Ordering::SeqCst), 0);

        let mut record = logger.create_log_record();
        record.set_body(AnyValue::from("still alive"));
        logger.emit(record);
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        // the logger holds the last reference
        drop(logger);
        assert_eq!(shutdown_calls.load(Ordering::SeqCst), 1);
    }

    #[derive(Debug, Default)]
    struct FlushRecordingProcessor {
        flush_timeouts: Arc<Mutex<Vec<Duration>>>,
    }

    impl LogProcessor for FlushRecordingProcessor {
        type Recordable = SdkLogRecord;

        fn make_recordable(&self) -> SdkLogRecord {
            SdkLogRecord::new()
        }

        fn on_emit(&self, _record: SdkLogRecord) {}

        fn force_flush_with_timeout(&self, timeout: Duration) -> OTelSdkResult {
            self.flush_timeouts.lock().unwrap().push(timeout);
            Ok(())
        }

        fn shutdown_with_timeout(&self, _timeout: Duration) -> OTelSdkResult {
            Ok(())
        }
    }

    #[test]
    fn force_flush_reaches_processor() {
        let exporter = InMemoryLogExporter::default();
        let provider = SdkLoggerProvider::builder()
            .with_simple_exporter(exporter)
            .build();
        assert_eq!(provider.force_flush(), Ok(()));
    }

    #[test]
    fn force_flush_passes_timeout_to_processor() {
        let processor = FlushRecordingProcessor::default();
        let flush_timeouts = Arc::clone(&processor.flush_timeouts);
        let provider = SdkLoggerProvider::builder()
            .with_log_processor(processor)
            .build();

        assert_eq!(
            provider.force_flush_with_timeout(Duration::from_millis(250)),
            Ok(())
        );
        assert_eq!(provider.force_flush(), Ok(()));

        assert_eq!(
            *flush_timeouts.lock().unwrap(),
            [Duration::from_millis(250), Duration::MAX]
        );
    }

    #[test]
    fn logger_with_empty_name_still_works() {
        let exporter = InMemoryLogExporter::default();
        let provider = SdkLoggerProvider::builder()
            .with_simple_exporter(exporter.clone())
            .build();
        let logger = provider.logger("");
        assert_eq!(logger.name(), "");
        logger.emit(logger.create_log_record());
        assert_eq!(exporter.get_emitted_logs().unwrap().len(), 1);
    }
}
