//! Representations of entities producing telemetry.
//!
//! A [Resource] is an immutable set of attributes describing the process
//! that emits log records, such as its service name. Every record created by
//! an [`SdkLoggerProvider`](crate::logs::SdkLoggerProvider) is stamped with
//! the provider's resource.
//!
//! # Resource detectors
//!
//! [`ResourceDetector`]s build resources from the runtime environment. The
//! following are applied by [`Resource::builder`]:
//!
//! - [`EnvResourceDetector`] - attributes from `OTEL_RESOURCE_ATTRIBUTES`.
//! - [`TelemetryResourceDetector`] - information about this SDK.
//! - [`SdkProvidedResourceDetector`] - `service.name`, falling back to
//!   `unknown_service`.
mod env;
mod telemetry;

pub use env::{EnvResourceDetector, SdkProvidedResourceDetector};
pub use telemetry::TelemetryResourceDetector;

use otel_logs::logs::AnyValue;
use otel_logs::{Key, KeyValue};
use std::borrow::Cow;
use std::collections::{btree_map, BTreeMap};
use std::sync::Arc;

/// Logical name of the service.
pub const SERVICE_NAME: &str = "service.name";

#[derive(Debug, Clone, PartialEq)]
struct ResourceInner {
    attrs: BTreeMap<Key, AnyValue>,
    schema_url: Option<Cow<'static, str>>,
}

/// An immutable representation of the entity producing telemetry as attributes.
/// Cloning is cheap; clones share the same attribute map.
#[derive(Clone, Debug, PartialEq)]
pub struct Resource {
    inner: Arc<ResourceInner>,
}

impl Default for Resource {
    /// Same as `Resource::builder().build()`.
    fn default() -> Self {
        Resource::builder().build()
    }
}

impl Resource {
    /// Creates a [ResourceBuilder] pre-populated by the
    /// [EnvResourceDetector], the [TelemetryResourceDetector] and the
    /// [SdkProvidedResourceDetector], in that order.
    ///
    /// To start from an empty resource, use [Resource::builder_empty].
    pub fn builder() -> ResourceBuilder {
        ResourceBuilder {
            resource: Self::from_detectors(&[
                Box::new(EnvResourceDetector::new()),
                Box::new(TelemetryResourceDetector),
                Box::new(SdkProvidedResourceDetector),
            ]),
        }
    }

    /// Creates a [ResourceBuilder] without any attributes.
    pub fn builder_empty() -> ResourceBuilder {
        ResourceBuilder {
            resource: Resource::empty(),
        }
    }

    pub(crate) fn empty() -> Self {
        Resource {
            inner: Arc::new(ResourceInner {
                attrs: BTreeMap::new(),
                schema_url: None,
            }),
        }
    }

    /// Values are de-duplicated by key; the last pair wins.
    fn new<T: IntoIterator<Item = KeyValue>>(kvs: T) -> Self {
        Resource {
            inner: Arc::new(ResourceInner {
                attrs: kvs.into_iter().map(|kv| (kv.key, kv.value)).collect(),
                schema_url: None,
            }),
        }
    }

    fn from_detectors(detectors: &[Box<dyn ResourceDetector>]) -> Self {
        detectors
            .iter()
            .fold(Resource::empty(), |acc, detector| acc.merge(&detector.detect()))
    }

    /// Combines two resources. Keys of `other` take priority.
    ///
    /// The schema url of `self` is kept when `other` has none or the same
    /// one. Two different schema urls cancel each other out.
    fn merge(&self, other: &Resource) -> Self {
        if self.is_empty() && self.schema_url().is_none() {
            return other.clone();
        }
        if other.is_empty() && other.schema_url().is_none() {
            return self.clone();
        }
        let mut attrs = self.inner.attrs.clone();
        for (k, v) in other.inner.attrs.iter() {
            attrs.insert(k.clone(), v.clone());
        }

        let schema_url = match (&self.inner.schema_url, &other.inner.schema_url) {
            (Some(a), Some(b)) if a == b => Some(a.clone()),
            (Some(_), Some(_)) => None,
            (None, Some(url)) | (Some(url), None) => Some(url.clone()),
            (None, None) => None,
        };
        Resource {
            inner: Arc::new(ResourceInner { attrs, schema_url }),
        }
    }

    /// Returns the schema url of the resource, if any.
    pub fn schema_url(&self) -> Option<&str> {
        self.inner.schema_url.as_deref()
    }

    /// Returns the number of attributes for this resource.
    pub fn len(&self) -> usize {
        self.inner.attrs.len()
    }

    /// Returns `true` if the resource contains no attributes.
    pub fn is_empty(&self) -> bool {
        self.inner.attrs.is_empty()
    }

    /// Gets an iterator over the attributes of this resource, sorted by key.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.inner.attrs.iter())
    }

    /// Retrieves the value associated with `key`.
    pub fn get(&self, key: &Key) -> Option<AnyValue> {
        self.inner.attrs.get(key).cloned()
    }
}

/// An iterator over the entries of a `Resource`.
#[derive(Debug)]
pub struct Iter<'a>(btree_map::Iter<'a, Key, AnyValue>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Key, &'a AnyValue);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

impl<'a> IntoIterator for &'a Resource {
    type Item = (&'a Key, &'a AnyValue);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Detects resource information from the environment.
pub trait ResourceDetector {
    /// Returns the detected resource. When the source is unavailable or
    /// invalid, an empty resource is returned.
    fn detect(&self) -> Resource;
}

/// Builder for [Resource].
#[derive(Debug)]
pub struct ResourceBuilder {
    resource: Resource,
}

impl ResourceBuilder {
    /// Runs `detector` and merges its result into the resource.
    pub fn with_detector(mut self, detector: Box<dyn ResourceDetector>) -> Self {
        self.resource = self.resource.merge(&detector.detect());
        self
    }

    /// Adds a [KeyValue] to the resource.
    pub fn with_attribute(self, kv: KeyValue) -> Self {
        self.with_attributes([kv])
    }

    /// Adds multiple [KeyValue]s to the resource.
    pub fn with_attributes<T: IntoIterator<Item = KeyValue>>(mut self, kvs: T) -> Self {
        self.resource = self.resource.merge(&Resource::new(kvs));
        self
    }

    /// Sets the `service.name` attribute.
    pub fn with_service_name(self, name: impl Into<AnyValue>) -> Self {
        self.with_attribute(KeyValue::new(SERVICE_NAME, name.into()))
    }

    /// Sets the schema url. If the resource already carries a different
    /// schema url, the result has none.
    pub fn with_schema_url(mut self, schema_url: impl Into<Cow<'static, str>>) -> Self {
        let schema_url = schema_url.into();
        let with_url = Resource {
            inner: Arc::new(ResourceInner {
                attrs: BTreeMap::new(),
                schema_url: (!schema_url.is_empty()).then_some(schema_url),
            }),
        };
        self.resource = self.resource.merge(&with_url);
        self
    }

    /// Creates the [Resource].
    pub fn build(self) -> Resource {
        self.resource
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case([KeyValue::new("a", ""), KeyValue::new("a", "final")], [(Key::new("a"), AnyValue::from("final"))])]
    #[case([KeyValue::new("a", "final"), KeyValue::new("a", "")], [(Key::new("a"), AnyValue::from(""))])]
    fn new_resource_last_value_wins(
        #[case] given: [KeyValue; 2],
        #[case] expected: [(Key, AnyValue); 1],
    ) {
        let resource = Resource::new(given);
        let attrs: Vec<_> = resource
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        assert_eq!(attrs, expected.to_vec());
    }

    #[test]
    fn merge_prefers_other() {
        let a = Resource::builder_empty()
            .with_attributes([KeyValue::new("a", "a1"), KeyValue::new("b", "b1")])
            .build();
        let b = Resource::new([KeyValue::new("b", "b2"), KeyValue::new("c", "c2")]);

        let merged = a.merge(&b);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.get(&Key::new("a")), Some(AnyValue::from("a1")));
        assert_eq!(merged.get(&Key::new("b")), Some(AnyValue::from("b2")));
        assert_eq!(merged.get(&Key::new("c")), Some(AnyValue::from("c2")));
    }

    #[rstest]
    #[case(Some("http://a"), Some("http://a"), Some("http://a"))]
    #[case(Some("http://a"), Some("http://b"), None)]
    #[case(None, Some("http://b"), Some("http://b"))]
    #[case(Some("http://a"), None, Some("http://a"))]
    #[case(None, None, None)]
    fn schema_url_resolution(
        #[case] first: Option<&'static str>,
        #[case] second: Option<&'static str>,
        #[case] expected: Option<&'static str>,
    ) {
        let mut builder = Resource::builder_empty().with_attribute(KeyValue::new("k", "v"));
        for url in [first, second].into_iter().flatten() {
            builder = builder.with_schema_url(url);
        }
        assert_eq!(builder.build().schema_url(), expected);
    }

    #[test]
    fn builder_empty_is_empty() {
        let resource = Resource::builder_empty().build();
        assert!(resource.is_empty());
        assert_eq!(resource.iter().count(), 0);
    }

    #[test]
    fn builder_detects_defaults() {
        temp_env::with_vars_unset(["OTEL_SERVICE_NAME", "OTEL_RESOURCE_ATTRIBUTES"], || {
            let resource = Resource::builder().build();
            assert_eq!(
                resource.get(&Key::new(SERVICE_NAME)),
                Some(AnyValue::from("unknown_service"))
            );
            assert_eq!(
                resource.get(&Key::new("telemetry.sdk.language")),
                Some(AnyValue::from("rust"))
            );
        });
    }

    #[test]
    fn with_service_name_overrides_detected() {
        temp_env::with_var("OTEL_SERVICE_NAME", Some("from-env"), || {
            let resource = Resource::builder().with_service_name("explicit").build();
            assert_eq!(
                resource.get(&Key::new(SERVICE_NAME)),
                Some(AnyValue::from("explicit"))
            );
        });
    }
}
