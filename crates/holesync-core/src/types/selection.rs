use serde::{Deserialize, Serialize};

/// Per-slave selection of which configuration categories to replicate.
///
/// Each flag is independent. A flag left out of the config file is
/// false, and a false flag guarantees the category is never
/// transmitted to that slave regardless of master content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncItemSelection {
    /// Replicate external block-list URLs
    #[serde(default)]
    pub adlists: bool,

    /// Replicate blocked domains
    #[serde(default)]
    pub blacklist: bool,

    /// Replicate allowed domains
    #[serde(default)]
    pub whitelist: bool,

    /// Replicate regex rules (snapshot transport only)
    #[serde(default)]
    pub regex: bool,

    /// Replicate groups
    #[serde(default)]
    pub groups: bool,

    /// Replicate local DNS records
    #[serde(default)]
    pub dns_records: bool,

    /// Replicate DHCP reservations
    #[serde(default)]
    pub dhcp: bool,

    /// Replicate known clients (snapshot transport only)
    #[serde(default)]
    pub clients: bool,

    /// Replicate global settings (snapshot transport only)
    #[serde(default)]
    pub settings: bool,
}

impl SyncItemSelection {
    /// Selection with every category enabled
    #[must_use]
    pub const fn all() -> Self {
        Self {
            adlists: true,
            blacklist: true,
            whitelist: true,
            regex: true,
            groups: true,
            dns_records: true,
            dhcp: true,
            clients: true,
            settings: true,
        }
    }

    /// Returns true if no category is selected
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.adlists
            || self.blacklist
            || self.whitelist
            || self.regex
            || self.groups
            || self.dns_records
            || self.dhcp
            || self.clients
            || self.settings)
    }
}

/// Teleporter `import` option map: category name to apply-flag.
///
/// Serializes to the JSON object the snapshot upload expects. This is
/// how per-slave selection is enforced on the snapshot transport,
/// where the archive itself always contains everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOptions {
    /// Apply external block-list URLs
    pub adlists: bool,
    /// Apply blocked domains
    pub blacklist: bool,
    /// Apply allowed domains
    pub whitelist: bool,
    /// Apply regex rules
    pub regex: bool,
    /// Apply groups
    pub groups: bool,
    /// Apply local DNS records
    pub dns_records: bool,
    /// Apply DHCP reservations
    pub dhcp: bool,
    /// Apply known clients
    pub clients: bool,
    /// Apply global settings
    pub settings: bool,
}

impl From<SyncItemSelection> for ImportOptions {
    /// Direct 1:1 projection of the per-slave selection
    fn from(sel: SyncItemSelection) -> Self {
        Self {
            adlists: sel.adlists,
            blacklist: sel.blacklist,
            whitelist: sel.whitelist,
            regex: sel.regex,
            groups: sel.groups,
            dns_records: sel.dns_records,
            dhcp: sel.dhcp,
            clients: sel.clients,
            settings: sel.settings,
        }
    }
}
