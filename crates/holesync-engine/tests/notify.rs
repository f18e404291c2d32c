//! Slack notifier tests against a mock webhook.

use holesync_engine::notify::SlackNotifier;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn posts_error_event_with_kind_and_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhook"))
        .and(body_partial_json(json!({ "text": "Pi-hole sync error" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = SlackNotifier::new(format!("{}/webhook", server.uri()), true);
    notifier
        .notify_error("sync_error", "failed to get master data")
        .await
        .unwrap();
}

#[tokio::test]
async fn disabled_notifier_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let notifier = SlackNotifier::new(format!("{}/webhook", server.uri()), false);
    notifier.notify_error("sync_error", "ignored").await.unwrap();

    let empty_url = SlackNotifier::new("", true);
    empty_url.notify_error("sync_error", "ignored").await.unwrap();
}

#[tokio::test]
async fn webhook_rejection_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(410).set_body_string("channel is archived"))
        .mount(&server)
        .await;

    let notifier = SlackNotifier::new(format!("{}/webhook", server.uri()), true);
    let err = notifier.notify_error("sync_error", "x").await.unwrap_err();
    assert!(err.to_string().contains("slack webhook returned status 410"));
}
