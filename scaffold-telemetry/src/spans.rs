//! Span helpers for common scaffold operations

use tracing::Span;

/// Create a span for tool execution
///
/// # Example
/// ```
/// use scaffold_telemetry::tool_execute_span;
/// let span = tool_execute_span("search_movies");
/// let _enter = span.enter();
/// ```
pub fn tool_execute_span(tool_name: &str) -> Span {
    tracing::info_span!("tool.execute", tool.name = tool_name)
}

/// Create a span covering service assembly at process start
pub fn service_assemble_span(app_name: &str) -> Span {
    tracing::info_span!("service.assemble", app.name = app_name)
}

/// Create a span for a `/run` request handled by the fallback service
pub fn run_request_span(app_name: &str, mode: &str) -> Span {
    tracing::info_span!("service.run", app.name = app_name, run.mode = mode)
}
