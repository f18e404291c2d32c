//! The sync engine: fetch from master, filter per slave, push with
//! retry, aggregate.

use crate::config::{Config, SlaveConfig, Transport};
use crate::filter::{build_import_options, filter_state};
use crate::metrics::SyncMetrics;
use chrono::{DateTime, Utc};
use futures_util::future::join_all;
use holesync_client::PiholeClient;
use holesync_core::{
    HolesyncError, ImportOptions, InstanceState, Result, SlaveOutcome, SyncResult,
};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Minimum wall-clock time between cycle completions
pub const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(10);

const MSG_RATE_LIMITED: &str = "sync skipped: a cycle completed less than 10 seconds ago";
const MSG_COMPLETED: &str = "sync completed";
const MSG_COMPLETED_WITH_ERRORS: &str = "sync completed with errors";

/// Externally visible engine state: Idle, or Cooling-down while a
/// cycle runs or the rate-limit window has not elapsed. There is no
/// timer; the transition back to Idle is a timestamp comparison made
/// on each trigger.
#[derive(Default)]
struct CycleGate {
    in_flight: bool,
    last_completed: Option<Instant>,
    last_synced_at: Option<DateTime<Utc>>,
}

impl CycleGate {
    fn is_open(&self) -> bool {
        !self.in_flight
            && self
                .last_completed
                .map_or(true, |t| t.elapsed() >= RATE_LIMIT_WINDOW)
    }
}

/// What a single slave receives within one cycle
enum PushPayload {
    State(InstanceState),
    Snapshot {
        archive: Vec<u8>,
        import: ImportOptions,
    },
}

/// The sync engine. One instance per process, owning one client per
/// configured Pi-hole for its whole lifetime.
pub struct Syncer {
    config: Config,
    master: PiholeClient,
    slaves: Vec<PiholeClient>,
    gate: Mutex<CycleGate>,
    metrics: Arc<SyncMetrics>,
}

impl Syncer {
    /// Build an engine from the deployment configuration
    #[must_use]
    pub fn new(config: Config) -> Self {
        let metrics = Arc::new(SyncMetrics::new());

        let master = PiholeClient::builder(&config.master.host, &config.master.password)
            .observer(metrics.clone())
            .build();

        let slaves = config
            .slaves
            .iter()
            .map(|slave| {
                PiholeClient::builder(&slave.host, &slave.password)
                    .observer(metrics.clone())
                    .build()
            })
            .collect();

        Self {
            config,
            master,
            slaves,
            gate: Mutex::new(CycleGate::default()),
            metrics,
        }
    }

    /// True iff a new cycle may start now. Safe to call concurrently
    /// with [`sync`](Self::sync); never blocks on network I/O.
    #[must_use]
    pub fn can_sync(&self) -> bool {
        self.gate.lock().expect("gate lock poisoned").is_open()
    }

    /// When the last cycle completed, if any
    #[must_use]
    pub fn last_sync(&self) -> Option<DateTime<Utc>> {
        self.gate.lock().expect("gate lock poisoned").last_synced_at
    }

    /// The engine's metric sink
    #[must_use]
    pub fn metrics(&self) -> &SyncMetrics {
        &self.metrics
    }

    /// Run one sync cycle.
    ///
    /// Rate-limited triggers return a `success: false` result without
    /// touching the network; a failed master read is a hard error and
    /// reopens the gate; slave failures are captured per slave and
    /// never abort the cycle.
    pub async fn sync(&self) -> Result<SyncResult> {
        if !self.begin_cycle() {
            return Ok(SyncResult {
                success: false,
                message: MSG_RATE_LIMITED.into(),
                synced_at: Utc::now(),
                details: Vec::new(),
            });
        }

        info!("starting synchronization");

        let details = match self.run_cycle().await {
            Ok(details) => details,
            Err(err) => {
                // The cycle never ran to completion; let the next
                // trigger through instead of starting a cooldown.
                self.abort_cycle();
                self.metrics.record_cycle(false);
                return Err(err);
            }
        };

        let success = details.iter().all(SlaveOutcome::is_ok);
        let synced_at = self.complete_cycle();

        self.metrics.record_cycle(success);
        for outcome in details.iter().filter(|o| o.is_ok()) {
            self.metrics
                .record_last_success(&outcome.host, synced_at.timestamp());
        }

        let message = if success {
            info!("synchronization completed");
            MSG_COMPLETED
        } else {
            warn!("synchronization completed with errors");
            MSG_COMPLETED_WITH_ERRORS
        };

        Ok(SyncResult {
            success,
            message: message.into(),
            synced_at,
            details,
        })
    }

    /// Fetch from the master and fan out to every slave. Slaves run
    /// concurrently; the outcome order matches configuration order.
    async fn run_cycle(&self) -> Result<Vec<SlaveOutcome>> {
        let pushes: Vec<_> = match self.config.transport {
            Transport::Categories => {
                let master_state = self
                    .master
                    .fetch_state()
                    .await
                    .map_err(HolesyncError::master)?;

                self.config
                    .slaves
                    .iter()
                    .zip(&self.slaves)
                    .map(|(slave, client)| {
                        let payload =
                            PushPayload::State(filter_state(&master_state, &slave.sync_items));
                        self.push_with_retry(client, slave, payload)
                    })
                    .collect()
            }
            Transport::Teleporter => {
                let archive = self
                    .master
                    .fetch_backup()
                    .await
                    .map_err(HolesyncError::master)?;

                self.config
                    .slaves
                    .iter()
                    .zip(&self.slaves)
                    .map(|(slave, client)| {
                        let payload = PushPayload::Snapshot {
                            archive: archive.clone(),
                            import: build_import_options(&slave.sync_items),
                        };
                        self.push_with_retry(client, slave, payload)
                    })
                    .collect()
            }
        };

        Ok(join_all(pushes).await)
    }

    /// Push one payload to one slave with linear backoff: attempt N
    /// sleeps N seconds before retrying. The sleep is a task-level
    /// await, so other slaves keep making progress meanwhile.
    async fn push_with_retry(
        &self,
        client: &PiholeClient,
        slave: &SlaveConfig,
        payload: PushPayload,
    ) -> SlaveOutcome {
        let max_retries = self.config.sync_retry.max_retries();
        let mut attempt: u32 = 0;

        loop {
            let pushed = match &payload {
                PushPayload::State(state) => client.push_state(state).await,
                PushPayload::Snapshot { archive, import } => {
                    client.restore_backup(archive.clone(), import).await
                }
            };

            match pushed {
                Ok(()) => return SlaveOutcome::ok(&slave.host),
                Err(err) if attempt < max_retries => {
                    attempt += 1;
                    warn!(
                        host = %slave.host,
                        attempt,
                        max_retries,
                        error = %err,
                        "slave push failed, retrying"
                    );
                    tokio::time::sleep(Duration::from_secs(u64::from(attempt))).await;
                }
                Err(err) => {
                    let err = HolesyncError::push(&slave.host, err);
                    warn!(host = %slave.host, error = %err, "slave push failed");
                    return SlaveOutcome::error(&slave.host, err.to_string());
                }
            }
        }
    }

    /// Atomically claim the gate; false when cooling down or a cycle
    /// is already in flight
    fn begin_cycle(&self) -> bool {
        let mut gate = self.gate.lock().expect("gate lock poisoned");
        if !gate.is_open() {
            return false;
        }
        gate.in_flight = true;
        true
    }

    /// Release the gate without starting a cooldown (master read
    /// failed, nothing was pushed)
    fn abort_cycle(&self) {
        let mut gate = self.gate.lock().expect("gate lock poisoned");
        gate.in_flight = false;
    }

    /// Mark completion; the rate-limit window starts here, not at
    /// cycle start, so a concurrent trigger cannot restart it mid-way
    fn complete_cycle(&self) -> DateTime<Utc> {
        let now = Utc::now();
        let mut gate = self.gate.lock().expect("gate lock poisoned");
        gate.in_flight = false;
        gate.last_completed = Some(Instant::now());
        gate.last_synced_at = Some(now);
        now
    }
}
