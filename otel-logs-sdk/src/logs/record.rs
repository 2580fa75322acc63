use crate::Resource;
use otel_logs::{
    logs::{AnyValue, LogRecord, Severity},
    InstrumentationScope, Key, SpanId, TraceFlags, TraceId,
};
use std::{borrow::Cow, fmt::Debug, time::SystemTime};

/// A log record representation chosen by a [`LogExporter`].
///
/// Records are created by the exporter at the end of the pipeline (see
/// [`LogExporter::make_recordable`]), filled in by the producer through the
/// [`LogRecord`] setters, and then moved through the processor into the
/// exporter. Besides the producer-facing setters, the SDK stamps the
/// provider's [`Resource`] and the logger's [`InstrumentationScope`] onto
/// every record it creates.
///
/// [`LogExporter`]: crate::logs::LogExporter
/// [`LogExporter::make_recordable`]: crate::logs::LogExporter::make_recordable
pub trait Recordable: LogRecord + Send + Debug + 'static {
    /// Sets the resource of the provider that created this record.
    fn set_resource(&mut self, resource: &Resource);

    /// Sets the instrumentation scope of the logger that created this record.
    fn set_instrumentation_scope(&mut self, scope: &InstrumentationScope);
}

/// The standard [`Recordable`], holding every field a record can carry.
///
/// Exporters that do not need a specialized representation use this type.
#[derive(Debug, Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct SdkLogRecord {
    pub(crate) timestamp: Option<SystemTime>,
    pub(crate) observed_timestamp: Option<SystemTime>,
    pub(crate) trace_context: Option<TraceContext>,
    pub(crate) severity_text: Option<Cow<'static, str>>,
    pub(crate) severity_number: Option<Severity>,
    pub(crate) body: Option<AnyValue>,
    pub(crate) attributes: Vec<(Key, AnyValue)>,
    pub(crate) resource: Option<Resource>,
    pub(crate) instrumentation_scope: Option<InstrumentationScope>,
}

impl LogRecord for SdkLogRecord {
    fn set_timestamp(&mut self, timestamp: SystemTime) {
        self.timestamp = Some(timestamp);
    }

    fn set_observed_timestamp(&mut self, timestamp: SystemTime) {
        self.observed_timestamp = Some(timestamp);
    }

    fn set_trace_context(
        &mut self,
        trace_id: TraceId,
        span_id: SpanId,
        trace_flags: Option<TraceFlags>,
    ) {
        self.trace_context = Some(TraceContext {
            trace_id,
            span_id,
            trace_flags,
        });
    }

    fn set_severity_text(&mut self, severity_text: Cow<'static, str>) {
        self.severity_text = Some(severity_text);
    }

    fn set_severity_number(&mut self, severity_number: Severity) {
        self.severity_number = Some(severity_number);
    }

    fn set_body(&mut self, body: AnyValue) {
        self.body = Some(body);
    }

    fn set_attribute<K, V>(&mut self, key: K, value: V)
    where
        K: Into<Key>,
        V: Into<AnyValue>,
    {
        self.attributes.push((key.into(), value.into()));
    }
}

impl Recordable for SdkLogRecord {
    fn set_resource(&mut self, resource: &Resource) {
        self.resource = Some(resource.clone());
    }

    fn set_instrumentation_scope(&mut self, scope: &InstrumentationScope) {
        self.instrumentation_scope = Some(scope.clone());
    }
}

impl SdkLogRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        SdkLogRecord::default()
    }

    /// Returns the time when the event occurred.
    pub fn timestamp(&self) -> Option<SystemTime> {
        self.timestamp
    }

    /// Returns the time when the event was observed.
    pub fn observed_timestamp(&self) -> Option<SystemTime> {
        self.observed_timestamp
    }

    /// Returns the trace context, if the record is associated with a span.
    pub fn trace_context(&self) -> Option<&TraceContext> {
        self.trace_context.as_ref()
    }

    /// Returns the original severity string.
    pub fn severity_text(&self) -> Option<&str> {
        self.severity_text.as_deref()
    }

    /// Returns the normalized severity.
    pub fn severity_number(&self) -> Option<Severity> {
        self.severity_number
    }

    /// Returns the body of the record.
    pub fn body(&self) -> Option<&AnyValue> {
        self.body.as_ref()
    }

    /// Iterates over the attributes in the order they were set. Setting a
    /// key twice yields both entries.
    pub fn attributes_iter(&self) -> impl Iterator<Item = &(Key, AnyValue)> {
        self.attributes.iter()
    }

    /// Returns the number of attributes.
    pub fn attributes_len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns true if the record holds an attribute with the given key and value.
    pub fn attributes_contains(&self, key: &Key, value: &AnyValue) -> bool {
        self.attributes
            .iter()
            .any(|(k, v)| k == key && v == value)
    }

    /// Returns the resource stamped by the provider.
    pub fn resource(&self) -> Option<&Resource> {
        self.resource.as_ref()
    }

    /// Returns the instrumentation scope stamped by the logger.
    pub fn instrumentation_scope(&self) -> Option<&InstrumentationScope> {
        self.instrumentation_scope.as_ref()
    }
}

/// Trace data for records that belong to a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct TraceContext {
    /// Trace id
    pub trace_id: TraceId,
    /// Span Id
    pub span_id: SpanId,
    /// Trace flags
    pub trace_flags: Option<TraceFlags>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use otel_logs::KeyValue;
    use std::time::Duration;

    #[test]
    fn setters_fill_record() {
        let ts = SystemTime::UNIX_EPOCH + Duration::from_secs(1);
        let mut record = SdkLogRecord::new();
        record.set_timestamp(ts);
        record.set_severity_text("WARN".into());
        record.set_severity_number(Severity::Warn);
        record.set_body("boom".into());
        record.set_trace_context(TraceId::from(1u128), SpanId::from(2u64), None);

        assert_eq!(record.timestamp(), Some(ts));
        assert_eq!(record.observed_timestamp(), None);
        assert_eq!(record.severity_text(), Some("WARN"));
        assert_eq!(record.severity_number(), Some(Severity::Warn));
        assert_eq!(record.body(), Some(&AnyValue::from("boom")));
        let trace_context = record.trace_context().unwrap();
        assert_eq!(trace_context.trace_id, TraceId::from(1u128));
        assert_eq!(trace_context.span_id, SpanId::from(2u64));
        assert_eq!(trace_context.trace_flags, None);
    }

    #[test]
    fn attributes_keep_insertion_order() {
        let mut record = SdkLogRecord::new();
        record.set_attribute("a", 1);
        record.add_attributes([("b", "two"), ("a", "again")]);

        let keys: Vec<_> = record.attributes_iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["a", "b", "a"]);
        assert_eq!(record.attributes_len(), 3);
        assert!(record.attributes_contains(&Key::new("a"), &AnyValue::Int(1)));
        assert!(record.attributes_contains(&Key::new("a"), &AnyValue::from("again")));
        assert!(!record.attributes_contains(&Key::new("b"), &AnyValue::Int(1)));
    }

    #[test]
    fn recordable_stamps_resource_and_scope() {
        let resource = Resource::builder_empty()
            .with_attribute(KeyValue::new("service.name", "svc"))
            .build();
        let scope = InstrumentationScope::builder("lib").with_version("1.0").build();

        let mut record = SdkLogRecord::new();
        record.set_resource(&resource);
        record.set_instrumentation_scope(&scope);

        assert_eq!(record.resource(), Some(&resource));
        assert_eq!(record.instrumentation_scope(), Some(&scope));
    }
}
