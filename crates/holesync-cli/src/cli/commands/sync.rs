//! One-shot sync command.

use anyhow::Result;
use holesync_engine::notify::SlackNotifier;
use holesync_engine::{Config, Syncer};

/// Run one cycle and print the structured result as JSON.
///
/// A hard master failure exits non-zero; per-slave failures are part
/// of the printed result and exit zero.
pub async fn execute(config: Config) -> Result<()> {
    let notifier = SlackNotifier::new(
        config.slack.webhook_url.clone(),
        config.slack.notify_on_error,
    );
    let syncer = Syncer::new(config);

    match syncer.sync().await {
        Ok(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            if !result.success && !result.details.is_empty() {
                notifier.notify_error("sync_failed", &result.message).await?;
            }
            Ok(())
        }
        Err(err) => {
            notifier.notify_error("sync_error", &err.to_string()).await?;
            Err(err.into())
        }
    }
}
