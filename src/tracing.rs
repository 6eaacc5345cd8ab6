//! Trace-event hooks for compile and render observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]`
//! boilerplate at every call site.

/// Emit a debug-level tracing event when a template is compiled.
#[macro_export]
macro_rules! sanitize_trace_compile {
    ($template_len:expr, $part_count:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            template_len = $template_len,
            parts = $part_count,
            "sanitize.compile"
        );
    };
}

/// Emit a debug-level tracing event when a query is rendered.
#[macro_export]
macro_rules! sanitize_trace_render {
    ($part_count:expr, $arg_count:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(parts = $part_count, args = $arg_count, "sanitize.render");
    };
}
