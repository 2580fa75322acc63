//! Diagnostics emitted by the pipeline itself.
//!
//! **Note**: `otel_info!`, `otel_warn!`, `otel_debug!` and `otel_error!` are
//! meant for processors, exporters and other plugins reporting on their own
//! health. They are not a general purpose application logging facility.
//!
//! Every macro takes a static event `name` (`"Component.Event"`) followed by
//! optional `key = value` pairs. The expansion is evaluated against the
//! features of the *calling* crate:
//! - with `internal-logs`, the event is forwarded to `tracing`, using the
//!   calling crate's name as target;
//! - under `cfg(test)`, the event is also printed to stdout, which shows up
//!   when running tests with `--nocapture`;
//! - otherwise the arguments are evaluated and discarded.

#[doc(hidden)]
#[macro_export]
macro_rules! __otel_internal_log {
    ($level:ident, $label:literal, $name:expr $(, $key:ident = $value:expr)*) => {
        #[cfg(feature = "internal-logs")]
        {
            $crate::_private::$level!(
                name: $name,
                target: env!("CARGO_PKG_NAME"),
                name = $name
                $(, $key = { $value })*
            );
        }

        #[cfg(test)]
        {
            print!("{}: name={}", $label, $name);
            $(
                print!(", {}={}", stringify!($key), $value);
            )*
            print!("\n");
        }

        #[cfg(all(not(feature = "internal-logs"), not(test)))]
        {
            let _ = ($name $(, $value)*);
        }
    };
}

/// Logs an informational pipeline event.
///
/// # Example
/// ```rust
/// use otel_logs::otel_info;
/// otel_info!(name: "LoggerProvider.Built", processor = "simple");
/// ```
#[macro_export]
macro_rules! otel_info {
    (name: $name:expr $(, $key:ident = $value:expr)* $(,)?) => {
        $crate::__otel_internal_log!(info, "otel_info", $name $(, $key = $value)*)
    };
}

/// Logs a warning, typically a misuse that the pipeline recovered from.
///
/// # Example
/// ```rust
/// use otel_logs::otel_warn;
/// otel_warn!(name: "Logger.NameEmpty");
/// ```
#[macro_export]
macro_rules! otel_warn {
    (name: $name:expr $(, $key:ident = $value:expr)* $(,)?) => {
        $crate::__otel_internal_log!(warn, "otel_warn", $name $(, $key = $value)*)
    };
}

/// Logs a debug event.
///
/// # Example
/// ```rust
/// use otel_logs::otel_debug;
/// otel_debug!(name: "SimpleLogProcessor.Emit.AfterShutdown");
/// ```
#[macro_export]
macro_rules! otel_debug {
    (name: $name:expr $(, $key:ident = $value:expr)* $(,)?) => {
        $crate::__otel_internal_log!(debug, "otel_debug", $name $(, $key = $value)*)
    };
}

/// Logs an error that could not be returned to the caller.
///
/// # Example
/// ```rust
/// use otel_logs::otel_error;
/// otel_error!(name: "SimpleLogProcessor.Emit.ExportError", error = "broken pipe");
/// ```
#[macro_export]
macro_rules! otel_error {
    (name: $name:expr $(, $key:ident = $value:expr)* $(,)?) => {
        $crate::__otel_internal_log!(error, "otel_error", $name $(, $key = $value)*)
    };
}
