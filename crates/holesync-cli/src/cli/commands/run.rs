//! Interval scheduler command.

use anyhow::Result;
use holesync_engine::notify::SlackNotifier;
use holesync_engine::{Config, Syncer};
use std::time::Duration;
use tracing::{error, info, warn};

/// Sync on a fixed interval until Ctrl-C.
///
/// Cycle outcomes are logged rather than printed; a failed cycle
/// raises a Slack error event when notification is configured.
pub async fn execute(config: Config, interval: u64) -> Result<()> {
    let notifier = SlackNotifier::new(
        config.slack.webhook_url.clone(),
        config.slack.notify_on_error,
    );
    let syncer = Syncer::new(config);

    info!(interval, "starting scheduled sync loop");
    let mut ticker = tokio::time::interval(Duration::from_secs(interval.max(1)));

    loop {
        tokio::select! {
            _ = ticker.tick() => run_once(&syncer, &notifier).await,
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                return Ok(());
            }
        }
    }
}

async fn run_once(syncer: &Syncer, notifier: &SlackNotifier) {
    match syncer.sync().await {
        Ok(result) if result.success => {
            info!(message = %result.message, "scheduled sync completed");
        }
        Ok(result) => {
            warn!(message = %result.message, "scheduled sync reported errors");
            if !result.details.is_empty() {
                notify(notifier, "sync_failed", &result.message).await;
            }
        }
        Err(err) => {
            error!(error = %err, "scheduled sync failed");
            notify(notifier, "sync_error", &err.to_string()).await;
        }
    }
}

async fn notify(notifier: &SlackNotifier, kind: &str, detail: &str) {
    if let Err(err) = notifier.notify_error(kind, detail).await {
        warn!(error = %err, "failed to send slack notification");
    }
}
