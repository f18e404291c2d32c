//! Client group endpoints.

use crate::PiholeClient;
use holesync_core::Result;
use serde::Deserialize;

/// One group as reported by `GET /api/groups`
#[derive(Debug, Clone, Deserialize)]
pub struct GroupEntry {
    /// Group name
    pub name: String,
}

#[derive(Deserialize)]
struct GroupsResponse {
    #[serde(default)]
    groups: Vec<GroupEntry>,
}

/// Group endpoints
pub struct GroupsApi<'a> {
    client: &'a PiholeClient,
}

impl<'a> GroupsApi<'a> {
    pub(crate) fn new(client: &'a PiholeClient) -> Self {
        Self { client }
    }

    /// Names of all configured groups
    pub async fn names(&self) -> Result<Vec<String>> {
        let response: GroupsResponse = self.client.get_json("groups", &[]).await?;
        Ok(response.groups.into_iter().map(|g| g.name).collect())
    }

    /// Create a group
    pub async fn add(&self, name: &str) -> Result<()> {
        self.client.post("groups", &[("name", name)]).await.map(drop)
    }
}
