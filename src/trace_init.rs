//! Optional JSON trace output, enabled with the `trace` feature.

use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Keeps the background trace writer alive. Dropping it flushes the file.
#[must_use]
#[derive(Default)]
pub struct TraceGuard {
    #[cfg(feature = "trace")]
    _guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Write spans and events as JSON lines to `log_dir/sanscript-trace.jsonl`.
///
/// Filtering follows `RUST_LOG`, defaulting to debug for this workspace.
/// Only the first call installs a subscriber.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> TraceGuard {
    let mut guard = TraceGuard::default();
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, "sanscript-trace.jsonl");
        let (non_blocking, worker) = tracing_appender::non_blocking(file_appender);
        guard._guard = Some(worker);

        tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("sanscript=debug,sanscript_core=debug")
                }),
            )
            .init();
    });
    guard
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> TraceGuard {
    TraceGuard::default()
}
