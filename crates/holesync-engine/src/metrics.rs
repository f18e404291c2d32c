//! Prometheus metrics for sync cycles and per-call telemetry.

use holesync_client::CallObserver;
use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntGaugeVec, Opts, Registry, TextEncoder,
};
use std::time::Duration;

/// Metric sink for the sync engine.
///
/// Owns its own registry so several engines (or tests) never collide
/// on metric names. Also serves as the per-call [`CallObserver`] for
/// the instance clients.
pub struct SyncMetrics {
    registry: Registry,
    sync_success_total: IntCounter,
    sync_failure_total: IntCounter,
    api_call_total: IntCounter,
    error_total: IntCounter,
    api_call_duration: Histogram,
    last_success: IntGaugeVec,
}

impl SyncMetrics {
    /// Create and register the metric family
    #[must_use]
    pub fn new() -> Self {
        let registry = Registry::new();

        let sync_success_total = IntCounter::with_opts(Opts::new(
            "pihole_sync_success_total",
            "The total number of successful synchronizations",
        ))
        .expect("valid metric opts");

        let sync_failure_total = IntCounter::with_opts(Opts::new(
            "pihole_sync_failure_total",
            "The total number of failed synchronizations",
        ))
        .expect("valid metric opts");

        let api_call_total = IntCounter::with_opts(Opts::new(
            "pihole_api_call_total",
            "The total number of API calls",
        ))
        .expect("valid metric opts");

        let error_total = IntCounter::with_opts(Opts::new(
            "pihole_error_total",
            "The total number of errors",
        ))
        .expect("valid metric opts");

        let api_call_duration = Histogram::with_opts(HistogramOpts::new(
            "pihole_api_call_duration_seconds",
            "Elapsed time of individual API calls",
        ))
        .expect("valid metric opts");

        let last_success = IntGaugeVec::new(
            Opts::new(
                "pihole_sync_last_success_timestamp_seconds",
                "Unix time of the last successful sync per instance",
            ),
            &["host"],
        )
        .expect("valid metric opts");

        for collector in [
            Box::new(sync_success_total.clone()) as Box<dyn prometheus::core::Collector>,
            Box::new(sync_failure_total.clone()),
            Box::new(api_call_total.clone()),
            Box::new(error_total.clone()),
            Box::new(api_call_duration.clone()),
            Box::new(last_success.clone()),
        ] {
            registry.register(collector).expect("unique metric names");
        }

        Self {
            registry,
            sync_success_total,
            sync_failure_total,
            api_call_total,
            error_total,
            api_call_duration,
            last_success,
        }
    }

    /// Count a completed cycle
    pub fn record_cycle(&self, success: bool) {
        if success {
            self.sync_success_total.inc();
        } else {
            self.sync_failure_total.inc();
        }
    }

    /// Record the last successful sync time for one instance
    pub fn record_last_success(&self, host: &str, unix_seconds: i64) {
        self.last_success.with_label_values(&[host]).set(unix_seconds);
    }

    /// Render the registry in the Prometheus text exposition format
    #[must_use]
    pub fn gather(&self) -> String {
        let mut buf = Vec::new();
        let encoder = TextEncoder::new();
        if let Err(err) = encoder.encode(&self.registry.gather(), &mut buf) {
            tracing::warn!(error = %err, "failed to encode metrics");
            return String::new();
        }
        String::from_utf8(buf).unwrap_or_default()
    }
}

impl Default for SyncMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl CallObserver for SyncMetrics {
    fn on_call(&self, _endpoint: &str, elapsed: Duration, ok: bool) {
        self.api_call_total.inc();
        self.api_call_duration.observe(elapsed.as_secs_f64());
        if !ok {
            self.error_total.inc();
        }
    }
}
