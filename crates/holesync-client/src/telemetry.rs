//! Per-call telemetry hook.

use std::time::Duration;

/// Observer notified after every API call with the endpoint name, the
/// elapsed wall-clock time, and whether the call succeeded.
///
/// The default observer discards everything; the sync engine installs
/// a Prometheus-backed one.
pub trait CallObserver: Send + Sync {
    /// Record one completed API call
    fn on_call(&self, endpoint: &str, elapsed: Duration, ok: bool);
}

/// Observer that discards all telemetry
pub(crate) struct NoopObserver;

impl CallObserver for NoopObserver {
    fn on_call(&self, _endpoint: &str, _elapsed: Duration, _ok: bool) {}
}
