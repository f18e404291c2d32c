//! Adlist (gravity subscription) endpoints.

use crate::PiholeClient;
use holesync_core::Result;
use serde::Deserialize;

/// Adlist endpoints
pub struct ListsApi<'a> {
    client: &'a PiholeClient,
}

/// One subscribed list as reported by `GET /api/lists`
#[derive(Debug, Clone, Deserialize)]
pub struct ListEntry {
    /// The list URL
    pub address: String,

    /// `block` or `allow`; older instances omit it
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Deserialize)]
struct ListsResponse {
    #[serde(default)]
    lists: Vec<ListEntry>,
}

impl<'a> ListsApi<'a> {
    pub(crate) fn new(client: &'a PiholeClient) -> Self {
        Self { client }
    }

    /// All subscribed lists
    pub async fn all(&self) -> Result<Vec<ListEntry>> {
        let response: ListsResponse = self.client.get_json("lists", &[]).await?;
        Ok(response.lists)
    }

    /// URLs of the block-type lists only (the gravity adlists)
    pub async fn blocking_urls(&self) -> Result<Vec<String>> {
        Ok(self
            .all()
            .await?
            .into_iter()
            .filter(|entry| entry.kind.as_deref() == Some("block"))
            .map(|entry| entry.address)
            .collect())
    }

    /// Subscribe the instance to a list URL
    pub async fn add(&self, address: &str) -> Result<()> {
        self.client
            .post("lists", &[("address", address)])
            .await
            .map(drop)
    }
}
