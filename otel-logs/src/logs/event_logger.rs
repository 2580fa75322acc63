use std::borrow::Cow;
use std::sync::Arc;

use crate::logs::Logger;
use crate::Key;

/// Attribute carrying the domain of an event record.
pub const EVENT_DOMAIN: Key = Key::from_static_str("event.domain");

/// Attribute carrying the name of an event record.
pub const EVENT_NAME: Key = Key::from_static_str("event.name");

/// Emits named events on top of a regular [`Logger`].
///
/// An event is an ordinary log record tagged with the [`EVENT_DOMAIN`] and
/// [`EVENT_NAME`] attributes, so exporters can tell events apart from
/// free-form log lines. The wrapped logger does not need to know anything
/// about events.
pub trait EventLogger {
    /// The logger events are forwarded to.
    type Logger: Logger;

    /// Returns the name of the delegate logger.
    fn name(&self) -> &str;

    /// Returns the wrapped logger. Other owners may hold the same logger.
    fn delegate_logger(&self) -> Arc<Self::Logger>;

    /// Creates an empty record from the delegate logger.
    fn create_event_record(&self) -> <Self::Logger as Logger>::LogRecord {
        self.delegate_logger().create_log_record()
    }

    /// Tags `record` as the event `event_name` of this logger's domain and
    /// hands it over to the delegate logger.
    fn emit_event(&self, event_name: &str, record: <Self::Logger as Logger>::LogRecord);
}

/// Interfaces that can create [`EventLogger`] instances.
pub trait EventLoggerProvider {
    /// The [`EventLogger`] type wrapping a logger of type `L`.
    type EventLogger<L: Logger>: EventLogger<Logger = L>;

    /// Returns an event logger emitting events of `event_domain` through
    /// `delegate_logger`.
    fn event_logger<L: Logger>(
        &self,
        delegate_logger: Arc<L>,
        event_domain: impl Into<Cow<'static, str>>,
    ) -> Self::EventLogger<L>;
}
