//! Environment variables resource detector
//!
//! Implementation of `ResourceDetector` to extract a `Resource` from environment
//! variables.
use crate::resource::{Resource, ResourceDetector, SERVICE_NAME};
use otel_logs::logs::AnyValue;
use otel_logs::{Key, KeyValue};
use std::env;

const OTEL_RESOURCE_ATTRIBUTES: &str = "OTEL_RESOURCE_ATTRIBUTES";
const OTEL_SERVICE_NAME: &str = "OTEL_SERVICE_NAME";

/// Extracts a resource from the `OTEL_RESOURCE_ATTRIBUTES` environment
/// variable, formatted as `key1=value1,key2=value2`.
#[derive(Debug)]
pub struct EnvResourceDetector {
    _private: (),
}

impl ResourceDetector for EnvResourceDetector {
    fn detect(&self) -> Resource {
        match env::var(OTEL_RESOURCE_ATTRIBUTES) {
            Ok(s) if !s.is_empty() => construct_otel_resources(&s),
            Ok(_) | Err(_) => Resource::empty(),
        }
    }
}

impl EnvResourceDetector {
    /// Create `EnvResourceDetector` instance.
    pub fn new() -> Self {
        EnvResourceDetector { _private: () }
    }
}

impl Default for EnvResourceDetector {
    fn default() -> Self {
        EnvResourceDetector::new()
    }
}

/// Entries without a `=` are skipped.
fn construct_otel_resources(s: &str) -> Resource {
    Resource::builder_empty()
        .with_attributes(s.split_terminator(',').filter_map(|entry| {
            let (key, value) = entry.split_once('=')?;
            Some(KeyValue::new(
                key.trim().to_owned(),
                value.trim().to_owned(),
            ))
        }))
        .build()
}

/// Detects `service.name`.
///
/// `OTEL_SERVICE_NAME` is tried first, then the `service.name` entry of
/// `OTEL_RESOURCE_ATTRIBUTES`. If neither is set, `unknown_service` is used.
#[derive(Debug)]
pub struct SdkProvidedResourceDetector;

impl ResourceDetector for SdkProvidedResourceDetector {
    fn detect(&self) -> Resource {
        let service_name = env::var(OTEL_SERVICE_NAME)
            .ok()
            .filter(|s| !s.is_empty())
            .map(AnyValue::from)
            .or_else(|| {
                EnvResourceDetector::new()
                    .detect()
                    .get(&Key::from_static_str(SERVICE_NAME))
            })
            .unwrap_or_else(|| "unknown_service".into());

        Resource::builder_empty()
            .with_attribute(KeyValue::new(SERVICE_NAME, service_name))
            .build()
    }
}
