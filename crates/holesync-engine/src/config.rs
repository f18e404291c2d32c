//! Deployment configuration, loaded from a YAML file.

use holesync_core::{HolesyncError, Result, RetryPolicy, SyncItemSelection};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level deployment configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// The authoritative instance
    #[serde(default)]
    pub master: InstanceConfig,

    /// Dependent instances, in sync order
    #[serde(default)]
    pub slaves: Vec<SlaveConfig>,

    /// Which triggers are allowed to start a cycle
    #[serde(default)]
    pub sync_trigger: SyncTrigger,

    /// Logging level for the binary
    #[serde(default)]
    pub logging: Logging,

    /// Slack error notification settings
    #[serde(default)]
    pub slack: Slack,

    /// Retry policy for slave pushes (per deployment)
    #[serde(default)]
    pub sync_retry: RetryPolicy,

    /// Which API transport carries the state to the slaves
    #[serde(default)]
    pub transport: Transport,
}

/// Endpoint and shared secret of one instance
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstanceConfig {
    /// Base URL, e.g. `http://pi.hole`
    #[serde(default)]
    pub host: String,

    /// Web interface password or application API key
    #[serde(default)]
    pub password: String,
}

/// One dependent instance plus its item selection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlaveConfig {
    /// Base URL of the slave
    #[serde(default)]
    pub host: String,

    /// Shared secret of the slave
    #[serde(default)]
    pub password: String,

    /// Which categories this slave receives; omitted flags are false
    #[serde(default)]
    pub sync_items: SyncItemSelection,
}

/// Trigger configuration, consumed by the embedding process
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncTrigger {
    /// Cron-style schedule expression; empty disables scheduling
    #[serde(default)]
    pub schedule: String,

    /// Allow sync via API call
    #[serde(default)]
    pub api_call: bool,

    /// Allow sync from the web UI
    #[serde(default)]
    pub webui: bool,

    /// Trigger on configuration file changes
    #[serde(default)]
    pub config_file_watch: bool,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logging {
    /// Log level name (DEBUG, INFO, WARN, ERROR)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Force debug output regardless of level
    #[serde(default)]
    pub debug: bool,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            debug: false,
        }
    }
}

/// Slack webhook settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Slack {
    /// Incoming webhook URL; empty disables notification
    #[serde(default)]
    pub webhook_url: String,

    /// Send a notification when a cycle fails
    #[serde(default)]
    pub notify_on_error: bool,
}

/// Which transport carries state to the slaves.
///
/// The two transports have different idempotence semantics: category
/// calls are additive, the snapshot restore fully overwrites. Exactly
/// one is used per deployment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// Per-category fetch/push calls (additive)
    #[default]
    Categories,
    /// Whole-instance Teleporter snapshot restore (overwriting)
    Teleporter,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            HolesyncError::Config(format!(
                "failed to read config file {}: {e}",
                path.as_ref().display()
            ))
        })?;

        serde_yaml::from_str(&content)
            .map_err(|e| HolesyncError::Config(format!("failed to parse config file: {e}")))
    }

    /// Write configuration back to a YAML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| HolesyncError::Config(format!("failed to serialize config: {e}")))?;

        std::fs::write(path.as_ref(), content).map_err(|e| {
            HolesyncError::Config(format!(
                "failed to write config file {}: {e}",
                path.as_ref().display()
            ))
        })
    }

    /// Check for the mistakes a YAML file can smuggle past serde
    pub fn validate(&self) -> Result<()> {
        if self.master.host.is_empty() {
            return Err(HolesyncError::Config("master.host is required".into()));
        }

        for (i, slave) in self.slaves.iter().enumerate() {
            if slave.host.is_empty() {
                return Err(HolesyncError::Config(format!(
                    "slaves[{i}].host is required"
                )));
            }
        }

        Ok(())
    }
}

fn default_log_level() -> String {
    String::from("INFO")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r"
master:
  host: http://pi-master.lan
  password: secret
slaves:
  - host: http://pi-slave1.lan
    password: secret1
    sync_items:
      adlists: true
      blacklist: true
  - host: http://pi-slave2.lan
    password: secret2
sync_retry:
  enabled: true
  count: 3
slack:
  webhook_url: https://hooks.slack.com/services/T/B/X
  notify_on_error: true
";

    #[test]
    fn parses_sample_config() {
        let config: Config = serde_yaml::from_str(SAMPLE).unwrap();
        assert_eq!(config.master.host, "http://pi-master.lan");
        assert_eq!(config.slaves.len(), 2);
        assert!(config.slaves[0].sync_items.adlists);
        assert!(!config.slaves[0].sync_items.dhcp);
        // Omitted selection block means nothing is replicated.
        assert!(config.slaves[1].sync_items.is_empty());
        assert_eq!(config.sync_retry.max_retries(), 3);
        assert_eq!(config.transport, Transport::Categories);
        assert!(config.slack.notify_on_error);
    }

    #[test]
    fn load_and_save_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{SAMPLE}").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert!(config.validate().is_ok());

        let out = tempfile::NamedTempFile::new().unwrap();
        config.save(out.path()).unwrap();
        let reloaded = Config::load(out.path()).unwrap();
        assert_eq!(reloaded.slaves.len(), config.slaves.len());
        assert_eq!(reloaded.master.host, config.master.host);
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = Config::load("/nonexistent/holesync.yaml").unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn validate_rejects_empty_hosts() {
        let config = Config::default();
        assert!(config.validate().unwrap_err().to_string().contains("master.host"));

        let config: Config = serde_yaml::from_str(
            "master:\n  host: http://pi.lan\nslaves:\n  - password: x\n",
        )
        .unwrap();
        assert!(config
            .validate()
            .unwrap_err()
            .to_string()
            .contains("slaves[0].host"));
    }

    #[test]
    fn teleporter_transport_parses() {
        let config: Config =
            serde_yaml::from_str("master:\n  host: http://pi.lan\ntransport: teleporter\n")
                .unwrap();
        assert_eq!(config.transport, Transport::Teleporter);
    }
}
