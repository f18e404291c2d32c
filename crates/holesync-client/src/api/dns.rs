//! Local DNS A-record endpoints.

use crate::PiholeClient;
use holesync_core::Result;
use serde::Deserialize;

/// One local A-record mapping as reported by `GET /api/dns`
#[derive(Debug, Clone, Deserialize)]
pub struct DnsRecordEntry {
    /// Record name
    pub domain: String,
    /// Target address
    pub ip: String,
}

#[derive(Deserialize)]
struct DnsResponse {
    #[serde(default)]
    records: Vec<DnsRecordEntry>,
}

/// Local DNS record endpoints
pub struct DnsApi<'a> {
    client: &'a PiholeClient,
}

impl<'a> DnsApi<'a> {
    pub(crate) fn new(client: &'a PiholeClient) -> Self {
        Self { client }
    }

    /// All local records as `name=value` pairs
    pub async fn records(&self) -> Result<Vec<String>> {
        let response: DnsResponse = self.client.get_json("dns", &[]).await?;
        Ok(response
            .records
            .into_iter()
            .map(|record| format!("{}={}", record.domain, record.ip))
            .collect())
    }

    /// Add a local A record
    pub async fn add(&self, domain: &str, ip: &str) -> Result<()> {
        self.client
            .post("dns", &[("domain", domain), ("ip", ip)])
            .await
            .map(drop)
    }
}
