//! run with `$ cargo run --example basic`

use std::sync::Arc;

use otel_logs::logs::{
    AnyValue, EventLogger, EventLoggerProvider, LogRecord, Logger, LoggerProvider, Severity,
};
use otel_logs_sdk::logs::{SdkEventLoggerProvider, SdkLoggerProvider};
use otel_logs_sdk::Resource;
use tracing_subscriber::filter::LevelFilter;

fn init_logs() -> SdkLoggerProvider {
    let exporter = otel_logs_stdout::LogExporter::default();
    SdkLoggerProvider::builder()
        .with_resource(
            Resource::builder()
                .with_service_name("basic-example")
                .build(),
        )
        .with_simple_exporter(exporter)
        .build()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Shows the pipeline's own diagnostics, such as the shutdown messages.
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    let provider = init_logs();
    let logger = Arc::new(provider.logger("stdout-example"));

    let mut record = logger.create_log_record();
    record.set_severity_number(Severity::Info);
    record.set_severity_text("INFO".into());
    record.set_body(AnyValue::from("hello from the stdout exporter"));
    record.set_attribute("user.name", "otel");
    record.set_attribute("user.email", "otel@example.com");
    logger.emit(record);

    let events = SdkEventLoggerProvider::new().event_logger(Arc::clone(&logger), "ui");
    let mut event = events.create_event_record();
    event.set_severity_number(Severity::Info);
    event.set_attribute("button", "submit");
    events.emit_event("click", event);

    provider.shutdown()?;
    Ok(())
}
