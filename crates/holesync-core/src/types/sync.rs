use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Retry policy for slave pushes, configured per deployment.
///
/// Governs the push path only; a failed master read is never retried
/// within a cycle.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Whether failed pushes are retried at all
    #[serde(default)]
    pub enabled: bool,

    /// Maximum number of retries after the initial attempt
    #[serde(default)]
    pub count: u32,
}

impl RetryPolicy {
    /// Effective retry ceiling: `count` when enabled, otherwise 0
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        if self.enabled {
            self.count
        } else {
            0
        }
    }
}

/// Outcome state for a single slave within a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlaveStatus {
    /// The slave accepted the filtered state
    Ok,
    /// The push failed after all configured retries
    Error,
}

/// Per-slave outcome of one sync cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlaveOutcome {
    /// The slave's configured host URL
    pub host: String,

    /// Whether the push succeeded
    pub result: SlaveStatus,

    /// Error detail for failed pushes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SlaveOutcome {
    /// Successful outcome for a slave
    #[must_use]
    pub fn ok(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            result: SlaveStatus::Ok,
            error: None,
        }
    }

    /// Failed outcome with its error detail
    #[must_use]
    pub fn error(host: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            result: SlaveStatus::Error,
            error: Some(detail.into()),
        }
    }

    /// Returns true if the slave was updated successfully
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.result == SlaveStatus::Ok
    }
}

/// Aggregated result of one sync cycle.
///
/// Constructed only by the sync engine and immutable afterwards. The
/// message is a cycle-level summary; per-slave detail lives in
/// `details`, ordered exactly like the slave configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncResult {
    /// True iff every slave reported ok
    pub success: bool,

    /// Cycle-level summary message
    pub message: String,

    /// When the cycle completed
    pub synced_at: DateTime<Utc>,

    /// Per-slave outcomes in configuration order
    #[serde(default)]
    pub details: Vec<SlaveOutcome>,
}
