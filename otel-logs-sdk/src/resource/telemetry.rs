use crate::resource::ResourceDetector;
use crate::Resource;
use otel_logs::KeyValue;

/// Detects information about the SDK recording the telemetry.
///
/// It provides:
/// - `telemetry.sdk.name`, the name of this crate.
/// - `telemetry.sdk.language`, always `rust`.
/// - `telemetry.sdk.version`, the version of this crate.
#[derive(Debug)]
pub struct TelemetryResourceDetector;

impl ResourceDetector for TelemetryResourceDetector {
    fn detect(&self) -> Resource {
        Resource::builder_empty()
            .with_attributes([
                KeyValue::new("telemetry.sdk.name", env!("CARGO_PKG_NAME")),
                KeyValue::new("telemetry.sdk.language", "rust"),
                KeyValue::new("telemetry.sdk.version", env!("CARGO_PKG_VERSION")),
            ])
            .build()
    }
}
