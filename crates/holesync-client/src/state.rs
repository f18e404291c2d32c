//! Whole-state fetch and push built on the per-category endpoints.

use crate::api::DomainKind;
use crate::PiholeClient;
use holesync_core::{Category, HolesyncError, ImportOptions, InstanceState, Result};
use tracing::warn;

impl PiholeClient {
    /// Fetch the instance's full configuration state, one request per
    /// category. Any category failure aborts the whole fetch, wrapped
    /// so the failing category is visible in the message chain.
    pub async fn fetch_state(&self) -> Result<InstanceState> {
        let adlists = self
            .lists()
            .blocking_urls()
            .await
            .map_err(|e| HolesyncError::fetch(Category::Adlists, e))?;

        let blacklist = self
            .domains()
            .block()
            .await
            .map_err(|e| HolesyncError::fetch(Category::Blacklist, e))?;

        let whitelist = self
            .domains()
            .allow()
            .await
            .map_err(|e| HolesyncError::fetch(Category::Whitelist, e))?;

        let groups = self
            .groups()
            .names()
            .await
            .map_err(|e| HolesyncError::fetch(Category::Groups, e))?;

        let dns_records = self
            .dns()
            .records()
            .await
            .map_err(|e| HolesyncError::fetch(Category::DnsRecords, e))?;

        // DHCP reservations travel only via the Teleporter snapshot.
        Ok(InstanceState {
            adlists,
            blacklist,
            whitelist,
            groups,
            dns_records,
            dhcp: Vec::new(),
        })
    }

    /// Push state additively, one add-request per entry per non-empty
    /// category. No diffing: the instance is expected to deduplicate.
    pub async fn push_state(&self, state: &InstanceState) -> Result<()> {
        for address in &state.adlists {
            self.lists().add(address).await?;
        }

        for domain in &state.blacklist {
            self.domains().add(domain, DomainKind::Block).await?;
        }

        for domain in &state.whitelist {
            self.domains().add(domain, DomainKind::Allow).await?;
        }

        for name in &state.groups {
            self.groups().add(name).await?;
        }

        for record in &state.dns_records {
            let Some((domain, ip)) = record.split_once('=') else {
                warn!(record = %record, "skipping malformed DNS record");
                continue;
            };
            self.dns().add(domain, ip).await?;
        }

        Ok(())
    }

    /// Download a whole-instance snapshot
    pub async fn fetch_backup(&self) -> Result<Vec<u8>> {
        self.teleporter().download().await
    }

    /// Upload a snapshot, applying only the categories enabled in the
    /// import options
    pub async fn restore_backup(&self, archive: Vec<u8>, import: &ImportOptions) -> Result<()> {
        self.teleporter().upload(archive, import).await
    }
}
