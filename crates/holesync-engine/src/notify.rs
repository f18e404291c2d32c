//! Slack webhook notification for cycle-level failures.

use holesync_core::{HolesyncError, Result};
use serde::Serialize;
use tracing::debug;

/// Notifier posting error events to a Slack incoming webhook.
///
/// Disabled notifiers (or an empty webhook URL) swallow every event.
pub struct SlackNotifier {
    webhook_url: String,
    enabled: bool,
    http: reqwest::Client,
}

#[derive(Serialize)]
struct SlackMessage {
    text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<Attachment>,
}

#[derive(Serialize)]
struct Attachment {
    color: String,
    fields: Vec<Field>,
}

#[derive(Serialize)]
struct Field {
    title: String,
    value: String,
    short: bool,
}

impl SlackNotifier {
    /// Create a notifier; `enabled = false` makes every call a no-op
    #[must_use]
    pub fn new(webhook_url: impl Into<String>, enabled: bool) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            enabled,
            http: reqwest::Client::new(),
        }
    }

    /// Raise an error event with a short type tag and a detail string
    pub async fn notify_error(&self, kind: &str, detail: &str) -> Result<()> {
        if !self.enabled || self.webhook_url.is_empty() {
            debug!(kind, "slack notification suppressed");
            return Ok(());
        }

        let message = SlackMessage {
            text: String::from("Pi-hole sync error"),
            attachments: vec![Attachment {
                color: String::from("danger"),
                fields: vec![
                    Field {
                        title: String::from("Error type"),
                        value: kind.to_string(),
                        short: true,
                    },
                    Field {
                        title: String::from("Time"),
                        value: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
                        short: true,
                    },
                    Field {
                        title: String::from("Detail"),
                        value: detail.to_string(),
                        short: false,
                    },
                ],
            }],
        };

        let response = self
            .http
            .post(&self.webhook_url)
            .json(&message)
            .send()
            .await
            .map_err(|e| HolesyncError::Http(format!("failed to send slack message: {e}")))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(HolesyncError::Http(format!(
                "slack webhook returned status {}",
                status.as_u16()
            )))
        }
    }
}
