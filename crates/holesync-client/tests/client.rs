//! Integration tests against a mock FTL API.

use holesync_client::PiholeClient;
use holesync_core::{AuthFailure, HolesyncError, ImportOptions, SyncItemSelection};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SID: &str = "test-sid";
const CSRF: &str = "test-csrf";

async fn mock_auth(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/auth"))
        .and(body_partial_json(json!({ "password": "hunter2" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "session": { "sid": SID, "csrf": CSRF } })),
        )
        .expect(1)
        .mount(server)
        .await;
}

fn client_for(server: &MockServer) -> PiholeClient {
    PiholeClient::new(server.uri(), "hunter2")
}

#[tokio::test]
async fn authenticates_once_and_reuses_the_session() {
    let server = MockServer::start().await;
    mock_auth(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/lists"))
        .and(query_param("sid", SID))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "lists": [] })))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.lists().all().await.unwrap();
    client.lists().all().await.unwrap();
}

#[tokio::test]
async fn auth_rejection_carries_the_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth"))
        .respond_with(ResponseTemplate::new(401).set_body_string("wrong password"))
        .mount(&server)
        .await;

    let err = client_for(&server).lists().all().await.unwrap_err();
    assert!(matches!(
        err,
        HolesyncError::Auth(AuthFailure::Rejected { status: 401, .. })
    ));
}

#[tokio::test]
async fn missing_session_fields_are_distinct_failures() {
    for (body, expected) in [
        (json!({}), "session object not found"),
        (json!({ "session": {} }), "session.sid not found"),
        (json!({ "session": { "sid": SID } }), "session.csrf not found"),
    ] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let err = client_for(&server).lists().all().await.unwrap_err();
        assert!(
            err.to_string().contains(expected),
            "expected {expected:?} in {err}"
        );
    }
}

#[tokio::test]
async fn post_carries_sid_in_body_and_csrf_header() {
    let server = MockServer::start().await;
    mock_auth(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/domains"))
        .and(header("X-FTL-CSRF", CSRF))
        .and(body_partial_json(json!({
            "sid": SID,
            "domain": "ads.example.com",
            "type": "block",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .domains()
        .add("ads.example.com", holesync_client::api::DomainKind::Block)
        .await
        .unwrap();
}

#[tokio::test]
async fn fetch_state_splits_categories_by_discriminator() {
    let server = MockServer::start().await;
    mock_auth(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/lists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "lists": [
                { "address": "https://hosts.example/block.txt", "type": "block" },
                { "address": "https://hosts.example/allow.txt", "type": "allow" },
            ]
        })))
        .mount(&server)
        .await;

    // Blacklist and whitelist are two reads of the same resource.
    Mock::given(method("GET"))
        .and(path("/api/domains"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "domains": [
                { "domain": "ads.example.com", "type": "block" },
                { "domain": "good.example.com", "type": "allow" },
            ]
        })))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "groups": [{ "name": "Default" }, { "name": "Kids" }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/dns"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "records": [{ "domain": "nas.lan", "ip": "192.168.1.5" }]
        })))
        .mount(&server)
        .await;

    let state = client_for(&server).fetch_state().await.unwrap();
    assert_eq!(state.adlists, vec!["https://hosts.example/block.txt"]);
    assert_eq!(state.blacklist, vec!["ads.example.com"]);
    assert_eq!(state.whitelist, vec!["good.example.com"]);
    assert_eq!(state.groups, vec!["Default", "Kids"]);
    assert_eq!(state.dns_records, vec!["nas.lan=192.168.1.5"]);
    assert!(state.dhcp.is_empty());
}

#[tokio::test]
async fn category_failure_aborts_the_fetch_and_names_the_category() {
    let server = MockServer::start().await;
    mock_auth(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/lists"))
        .respond_with(ResponseTemplate::new(500).set_body_string("gravity unavailable"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_state().await.unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("failed to get adlists"), "got: {msg}");
    assert!(msg.contains("500"), "got: {msg}");
}

#[tokio::test]
async fn push_state_adds_each_entry_and_skips_malformed_dns() {
    let server = MockServer::start().await;
    mock_auth(&server).await;

    Mock::given(method("POST"))
        .and(path("/api/lists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/dns"))
        .and(body_partial_json(json!({ "domain": "nas.lan", "ip": "192.168.1.5" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let state = holesync_core::InstanceState {
        adlists: vec![
            "https://hosts.example/a.txt".into(),
            "https://hosts.example/b.txt".into(),
        ],
        dns_records: vec!["nas.lan=192.168.1.5".into(), "not-a-record".into()],
        ..Default::default()
    };

    client_for(&server).push_state(&state).await.unwrap();
}

#[tokio::test]
async fn teleporter_roundtrip_uses_header_session() {
    let server = MockServer::start().await;
    mock_auth(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/teleporter"))
        .and(header("sid", SID))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"PK\x03\x04archive".to_vec()))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/teleporter"))
        .and(header("sid", SID))
        .and(header("X-FTL-CSRF", CSRF))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let archive = client.fetch_backup().await.unwrap();
    assert!(archive.starts_with(b"PK"));

    let import = ImportOptions::from(SyncItemSelection::all());
    client.restore_backup(archive, &import).await.unwrap();
}
