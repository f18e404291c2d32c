//! Exact allow/block domain endpoints.
//!
//! FTL keeps both kinds behind one `/api/domains` resource with a
//! `type` discriminator, so fetching the blacklist and the whitelist
//! is two calls against the same endpoint.

use crate::PiholeClient;
use holesync_core::Result;
use serde::Deserialize;

/// Discriminator for the `/api/domains` resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainKind {
    /// Whitelisted domain
    Allow,
    /// Blacklisted domain
    Block,
}

impl DomainKind {
    /// The wire value of the `type` field
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Block => "block",
        }
    }
}

/// One domain entry as reported by `GET /api/domains`
#[derive(Debug, Clone, Deserialize)]
pub struct DomainEntry {
    /// The domain name
    pub domain: String,

    /// `allow` or `block`
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Deserialize)]
struct DomainsResponse {
    #[serde(default)]
    domains: Vec<DomainEntry>,
}

/// Allow/block domain endpoints
pub struct DomainsApi<'a> {
    client: &'a PiholeClient,
}

impl<'a> DomainsApi<'a> {
    pub(crate) fn new(client: &'a PiholeClient) -> Self {
        Self { client }
    }

    /// All domain entries of the given kind
    pub async fn of_kind(&self, kind: DomainKind) -> Result<Vec<String>> {
        let response: DomainsResponse = self.client.get_json("domains", &[]).await?;
        Ok(response
            .domains
            .into_iter()
            .filter(|entry| entry.kind.as_deref() == Some(kind.as_str()))
            .map(|entry| entry.domain)
            .collect())
    }

    /// Blacklisted domains
    pub async fn block(&self) -> Result<Vec<String>> {
        self.of_kind(DomainKind::Block).await
    }

    /// Whitelisted domains
    pub async fn allow(&self) -> Result<Vec<String>> {
        self.of_kind(DomainKind::Allow).await
    }

    /// Add a domain of the given kind
    pub async fn add(&self, domain: &str, kind: DomainKind) -> Result<()> {
        self.client
            .post("domains", &[("domain", domain), ("type", kind.as_str())])
            .await
            .map(drop)
    }
}
