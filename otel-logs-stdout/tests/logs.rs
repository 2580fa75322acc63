use otel_logs::logs::{
    AnyValue, EventLogger, EventLoggerProvider, LogRecord, Logger, LoggerProvider, Severity,
};
use otel_logs_sdk::logs::{SdkEventLoggerProvider, SdkLoggerProvider};
use otel_logs_sdk::Resource;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

#[derive(Clone, Debug, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn provider_with_buffer(buffer: &SharedBuffer) -> SdkLoggerProvider {
    let exporter = otel_logs_stdout::LogExporter::builder()
        .with_writer(buffer.clone())
        .build();
    SdkLoggerProvider::builder()
        .with_resource(
            Resource::builder_empty()
                .with_service_name("stdout-test")
                .build(),
        )
        .with_simple_exporter(exporter)
        .build()
}

#[test]
fn records_reach_the_writer_until_shutdown() {
    let buffer = SharedBuffer::default();
    let provider = provider_with_buffer(&buffer);
    let logger = provider.logger("integration");

    let mut record = logger.create_log_record();
    record.set_severity_number(Severity::Info);
    record.set_body(AnyValue::from("hello"));
    logger.emit(record);

    let output = buffer.contents();
    assert!(output.contains("  severity_num       : Info\n"));
    assert!(output.contains("  body               : hello\n"));
    assert!(output.contains("\n\tservice.name: stdout-test"));
    assert!(output.contains("    name             : integration\n"));

    assert!(provider.shutdown().is_ok());

    let mut late = logger.create_log_record();
    late.set_body(AnyValue::from("ignored"));
    logger.emit(late);

    assert!(!buffer.contents().contains("ignored"));
}

#[test]
fn events_carry_domain_and_name() {
    let buffer = SharedBuffer::default();
    let provider = provider_with_buffer(&buffer);
    let events =
        SdkEventLoggerProvider::new().event_logger(Arc::new(provider.logger("ui-lib")), "ui");

    let mut record = events.create_event_record();
    record.set_severity_number(Severity::Info);
    record.set_body(AnyValue::from("pressed"));
    events.emit_event("click", record);

    let output = buffer.contents();
    assert!(output.contains("\n\tevent.domain: ui"));
    assert!(output.contains("\n\tevent.name: click"));
    assert!(output.contains("  body               : pressed\n"));
}
