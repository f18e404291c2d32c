//! Teleporter snapshot endpoints: whole-instance export and import.

use crate::PiholeClient;
use holesync_core::{ImportOptions, Result};
use reqwest::multipart::{Form, Part};

/// File name FTL expects for an uploaded snapshot
const ARCHIVE_NAME: &str = "pihole_backup.zip";

/// Teleporter endpoints
pub struct TeleporterApi<'a> {
    client: &'a PiholeClient,
}

impl<'a> TeleporterApi<'a> {
    pub(crate) fn new(client: &'a PiholeClient) -> Self {
        Self { client }
    }

    /// Download a whole-instance snapshot archive
    pub async fn download(&self) -> Result<Vec<u8>> {
        self.client.get_raw("teleporter").await
    }

    /// Upload a snapshot archive. The `import` option map controls
    /// which parts of the archive the instance actually applies.
    pub async fn upload(&self, archive: Vec<u8>, import: &ImportOptions) -> Result<()> {
        let import_json = serde_json::to_string(import)?;

        let form = Form::new()
            .part("file", Part::bytes(archive).file_name(ARCHIVE_NAME))
            .text("resourceName", ARCHIVE_NAME)
            .text("import", import_json);

        self.client.post_multipart("teleporter", form).await
    }
}
