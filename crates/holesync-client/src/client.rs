//! Main Pi-hole API client implementation.

use crate::api::{DnsApi, DomainsApi, GroupsApi, ListsApi, TeleporterApi};
use crate::telemetry::{CallObserver, NoopObserver};
use holesync_core::{AuthFailure, HolesyncError, Result};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// CSRF header expected by FTL on non-GET requests
const CSRF_HEADER: &str = "X-FTL-CSRF";

/// Client for one Pi-hole instance's HTTP API
#[derive(Clone)]
pub struct PiholeClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    base_url: String,
    password: String,
    session: Mutex<Option<Session>>,
    observer: Arc<dyn CallObserver>,
}

/// Ephemeral session credentials, cached until the client is dropped.
///
/// There is no proactive expiry detection; an expired sid surfaces as
/// an ordinary API error on the next call.
#[derive(Clone)]
struct Session {
    sid: String,
    csrf: String,
}

#[derive(Deserialize)]
struct AuthResponse {
    #[serde(default)]
    session: Option<SessionInfo>,
}

#[derive(Deserialize)]
struct SessionInfo {
    #[serde(default)]
    sid: Option<String>,
    #[serde(default)]
    csrf: Option<String>,
}

impl PiholeClient {
    /// Create a new client with default settings
    #[must_use]
    pub fn new(base_url: impl Into<String>, password: impl Into<String>) -> Self {
        PiholeClientBuilder::new(base_url, password).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(
        base_url: impl Into<String>,
        password: impl Into<String>,
    ) -> PiholeClientBuilder {
        PiholeClientBuilder::new(base_url, password)
    }

    /// The instance's base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Access adlist endpoints
    #[must_use]
    pub fn lists(&self) -> ListsApi<'_> {
        ListsApi::new(self)
    }

    /// Access allow/block domain endpoints
    #[must_use]
    pub fn domains(&self) -> DomainsApi<'_> {
        DomainsApi::new(self)
    }

    /// Access group endpoints
    #[must_use]
    pub fn groups(&self) -> GroupsApi<'_> {
        GroupsApi::new(self)
    }

    /// Access local DNS record endpoints
    #[must_use]
    pub fn dns(&self) -> DnsApi<'_> {
        DnsApi::new(self)
    }

    /// Access the Teleporter snapshot endpoints
    #[must_use]
    pub fn teleporter(&self) -> TeleporterApi<'_> {
        TeleporterApi::new(self)
    }

    /// Establish a session unconditionally, replacing any cached one
    pub async fn authenticate(&self) -> Result<()> {
        let mut guard = self.inner.session.lock().await;
        *guard = Some(self.do_authenticate().await?);
        Ok(())
    }

    /// Return the cached session, authenticating exactly once if none
    /// exists yet. The lock is held across the auth round-trip so
    /// concurrent callers cannot race into duplicate logins.
    async fn ensure_session(&self) -> Result<Session> {
        let mut guard = self.inner.session.lock().await;
        if let Some(session) = guard.as_ref() {
            return Ok(session.clone());
        }
        let session = self.do_authenticate().await?;
        *guard = Some(session.clone());
        Ok(session)
    }

    async fn do_authenticate(&self) -> Result<Session> {
        let url = format!("{}/api/auth", self.inner.base_url);
        debug!(url = %url, "authenticating");

        let started = Instant::now();
        let response = self
            .inner
            .http
            .post(&url)
            .json(&serde_json::json!({ "password": self.inner.password }))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;
        self.inner
            .observer
            .on_call("auth", started.elapsed(), status.is_success());

        if !status.is_success() {
            return Err(AuthFailure::Rejected {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let parsed: AuthResponse = serde_json::from_str(&body)?;
        let session = parsed.session.ok_or(AuthFailure::MissingSession)?;
        let sid = session.sid.ok_or(AuthFailure::MissingSid)?;
        let csrf = session.csrf.ok_or(AuthFailure::MissingCsrf)?;

        Ok(Session { sid, csrf })
    }

    /// Perform an authenticated GET and decode the JSON response
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let session = self.ensure_session().await?;
        let url = self.build_url(endpoint, params, &session.sid);
        debug!(url = %url, "GET request");

        let started = Instant::now();
        let response = self
            .inner
            .http
            .get(&url)
            .send()
            .await
            .map_err(transport_error)?;

        let body = self.collect_response(endpoint, started, response).await?;
        serde_json::from_str(&body).map_err(HolesyncError::Json)
    }

    /// Perform an authenticated POST. The session id travels in the
    /// JSON body and the csrf token in a request header.
    pub(crate) async fn post(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<String> {
        let session = self.ensure_session().await?;
        let url = format!("{}/api/{}", self.inner.base_url, endpoint);
        debug!(url = %url, "POST request");

        let mut body = serde_json::Map::new();
        body.insert("sid".into(), session.sid.clone().into());
        for (key, value) in params {
            body.insert((*key).into(), (*value).into());
        }

        let started = Instant::now();
        let response = self
            .inner
            .http
            .post(&url)
            .header(CSRF_HEADER, &session.csrf)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        self.collect_response(endpoint, started, response).await
    }

    /// Authenticated GET returning raw bytes (Teleporter download).
    /// FTL accepts the sid as a request header here.
    pub(crate) async fn get_raw(&self, endpoint: &str) -> Result<Vec<u8>> {
        let session = self.ensure_session().await?;
        let url = format!("{}/api/{}", self.inner.base_url, endpoint);
        debug!(url = %url, "GET request (raw)");

        let started = Instant::now();
        let response = self
            .inner
            .http
            .get(&url)
            .header("sid", &session.sid)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status.is_success() {
            let bytes = response.bytes().await.map_err(transport_error)?;
            self.inner.observer.on_call(endpoint, started.elapsed(), true);
            Ok(bytes.to_vec())
        } else {
            let body = response.text().await.unwrap_or_default();
            self.inner.observer.on_call(endpoint, started.elapsed(), false);
            warn!(endpoint, status = status.as_u16(), "API request failed");
            Err(HolesyncError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Authenticated multipart POST (Teleporter upload)
    pub(crate) async fn post_multipart(
        &self,
        endpoint: &str,
        form: reqwest::multipart::Form,
    ) -> Result<()> {
        let session = self.ensure_session().await?;
        let url = format!("{}/api/{}", self.inner.base_url, endpoint);
        debug!(url = %url, "POST multipart request");

        let started = Instant::now();
        let response = self
            .inner
            .http
            .post(&url)
            .header("sid", &session.sid)
            .header(CSRF_HEADER, &session.csrf)
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;

        self.collect_response(endpoint, started, response).await?;
        Ok(())
    }

    /// Read out a response body, report telemetry, and map non-2xx to
    /// an API error
    async fn collect_response(
        &self,
        endpoint: &str,
        started: Instant,
        response: reqwest::Response,
    ) -> Result<String> {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        self.inner
            .observer
            .on_call(endpoint, started.elapsed(), status.is_success());

        if status.is_success() {
            Ok(body)
        } else {
            warn!(endpoint, status = status.as_u16(), "API request failed");
            Err(HolesyncError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Build a GET URL with the session id and query parameters
    fn build_url(&self, endpoint: &str, params: &[(&str, &str)], sid: &str) -> String {
        let mut url = format!("{}/api/{}", self.inner.base_url, endpoint);

        url.push_str("?sid=");
        url.push_str(&urlencoding::encode(sid));

        for (key, value) in params {
            url.push('&');
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }

        url
    }
}

/// Map a reqwest transport failure (including timeouts) to the error
/// taxonomy; timeouts are handled like any other failed request.
fn transport_error(err: reqwest::Error) -> HolesyncError {
    HolesyncError::Http(err.to_string())
}

/// Builder for configuring a [`PiholeClient`]
pub struct PiholeClientBuilder {
    base_url: String,
    password: String,
    timeout: Duration,
    observer: Arc<dyn CallObserver>,
}

impl PiholeClientBuilder {
    /// Create a new builder for the given instance
    #[must_use]
    pub fn new(base_url: impl Into<String>, password: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            password: password.into(),
            timeout: DEFAULT_TIMEOUT,
            observer: Arc::new(NoopObserver),
        }
    }

    /// Set the per-request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Install a per-call telemetry observer
    #[must_use]
    pub fn observer(mut self, observer: Arc<dyn CallObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Build the client
    #[must_use]
    pub fn build(self) -> PiholeClient {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(format!("holesync/{}", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .build()
            .expect("Failed to build HTTP client");

        PiholeClient {
            inner: Arc::new(ClientInner {
                http,
                base_url: self.base_url,
                password: self.password,
                session: Mutex::new(None),
                observer: self.observer,
            }),
        }
    }
}

// URL encoding helper
mod urlencoding {
    pub fn encode(s: &str) -> String {
        url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
    }
}
