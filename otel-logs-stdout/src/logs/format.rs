use chrono::{DateTime, Utc};
use otel_logs::logs::AnyValue;
use otel_logs::{InstrumentationScope, Key, KeyValue};
use otel_logs_sdk::logs::SdkLogRecord;
use otel_logs_sdk::Resource;
use std::fmt;
use std::time::SystemTime;

/// Renders one record as a `{ ... }` block, terminated by a newline.
pub(crate) struct RecordBlock<'a>(pub(crate) &'a SdkLogRecord);

impl fmt::Display for RecordBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.0;
        writeln!(f, "{{")?;
        writeln!(f, "  timestamp          : {}", Timestamp(record.timestamp()))?;
        writeln!(
            f,
            "  observed_timestamp : {}",
            Timestamp(record.observed_timestamp())
        )?;
        write!(f, "  severity_num       : ")?;
        if let Some(severity) = record.severity_number() {
            write!(f, "{severity:?}")?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "  severity_text      : {}",
            record.severity_text().unwrap_or_default()
        )?;
        write!(f, "  body               : ")?;
        if let Some(body) = record.body() {
            write!(f, "{}", Value(body))?;
        }
        writeln!(f)?;

        write!(f, "  resource           : ")?;
        if let Some(resource) = record.resource() {
            write_resource(f, resource)?;
        }
        writeln!(f)?;

        write!(f, "  attributes         : ")?;
        for (key, value) in record.attributes_iter() {
            write!(f, "\n\t{key}: {}", Value(value))?;
        }
        writeln!(f)?;

        match record.trace_context() {
            Some(trace_context) => {
                writeln!(f, "  trace_id           : {}", trace_context.trace_id)?;
                writeln!(f, "  span_id            : {}", trace_context.span_id)?;
                write!(f, "  trace_flags        : ")?;
                if let Some(flags) = trace_context.trace_flags {
                    write!(f, "{flags:02x}")?;
                }
                writeln!(f)?;
            }
            None => {
                writeln!(f, "  trace_id           : ")?;
                writeln!(f, "  span_id            : ")?;
                writeln!(f, "  trace_flags        : ")?;
            }
        }

        writeln!(f, "  scope              : ")?;
        if let Some(scope) = record.instrumentation_scope() {
            write_scope(f, scope)?;
        }
        writeln!(f, "}}")
    }
}

fn write_resource(f: &mut fmt::Formatter<'_>, resource: &Resource) -> fmt::Result {
    for (key, value) in resource.iter() {
        write!(f, "\n\t{key}: {}", Value(value))?;
    }
    if let Some(schema_url) = resource.schema_url() {
        write!(f, "\n\tschema_url: {schema_url}")?;
    }
    Ok(())
}

fn write_scope(f: &mut fmt::Formatter<'_>, scope: &InstrumentationScope) -> fmt::Result {
    writeln!(f, "    name             : {}", scope.name())?;
    writeln!(
        f,
        "    version          : {}",
        scope.version().unwrap_or_default()
    )?;
    writeln!(
        f,
        "    schema_url       : {}",
        scope.schema_url().unwrap_or_default()
    )?;
    write!(f, "    attributes       : ")?;
    for KeyValue { key, value, .. } in scope.attributes() {
        write!(f, "\n\t\t{key}: {}", Value(value))?;
    }
    writeln!(f)
}

struct Timestamp(Option<SystemTime>);

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(timestamp) => {
                let datetime: DateTime<Utc> = timestamp.into();
                write!(f, "{}", datetime.format("%Y-%m-%d %H:%M:%S%.6f"))
            }
            None => Ok(()),
        }
    }
}

/// Plain rendering of an [`AnyValue`]: strings unquoted, bytes as hex, maps
/// sorted by key.
struct Value<'a>(&'a AnyValue);

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            AnyValue::Int(v) => write!(f, "{v}"),
            AnyValue::Double(v) => write!(f, "{v}"),
            AnyValue::String(v) => f.write_str(v),
            AnyValue::Boolean(v) => write!(f, "{v}"),
            AnyValue::Bytes(bytes) => bytes.iter().try_for_each(|b| write!(f, "{b:02x}")),
            AnyValue::ListAny(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", Value(value))?;
                }
                f.write_str("]")
            }
            AnyValue::Map(map) => {
                let mut entries: Vec<(&Key, &AnyValue)> = map.iter().collect();
                entries.sort_by(|a, b| a.0.cmp(b.0));
                f.write_str("{")?;
                for (i, (key, value)) in entries.into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {}", Value(value))?;
                }
                f.write_str("}")
            }
            other => write!(f, "{other:?}"),
        }
    }
}
