use serde::{Deserialize, Serialize};

/// One named class of Pi-hole configuration data.
///
/// The string form doubles as the key vocabulary of the Teleporter
/// `import` option map, so the names must match what FTL expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// External block-list URLs (gravity adlists)
    Adlists,
    /// Exact/blocked domains
    Blacklist,
    /// Exact/allowed domains
    Whitelist,
    /// Regex domain rules (snapshot transport only)
    Regex,
    /// Client groups
    Groups,
    /// Local DNS A-record mappings
    DnsRecords,
    /// DHCP reservations
    Dhcp,
    /// Known clients (snapshot transport only)
    Clients,
    /// Global settings (snapshot transport only)
    Settings,
}

impl Category {
    /// Stable name used in error messages and Teleporter import options
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adlists => "adlists",
            Self::Blacklist => "blacklist",
            Self::Whitelist => "whitelist",
            Self::Regex => "regex",
            Self::Groups => "groups",
            Self::DnsRecords => "dns_records",
            Self::Dhcp => "dhcp",
            Self::Clients => "clients",
            Self::Settings => "settings",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate configuration state of one Pi-hole instance.
///
/// Every field is a plain sequence of strings; `dns_records` entries
/// are `name=value` pairs. An absent category and an empty category
/// are equivalent everywhere downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceState {
    /// External block-list URLs
    #[serde(default)]
    pub adlists: Vec<String>,

    /// Blocked domains
    #[serde(default)]
    pub blacklist: Vec<String>,

    /// Allowed domains
    #[serde(default)]
    pub whitelist: Vec<String>,

    /// Group names
    #[serde(default)]
    pub groups: Vec<String>,

    /// Local DNS records as `name=value` pairs
    #[serde(default)]
    pub dns_records: Vec<String>,

    /// DHCP reservations
    #[serde(default)]
    pub dhcp: Vec<String>,
}

impl InstanceState {
    /// Returns true if every category is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adlists.is_empty()
            && self.blacklist.is_empty()
            && self.whitelist.is_empty()
            && self.groups.is_empty()
            && self.dns_records.is_empty()
            && self.dhcp.is_empty()
    }

    /// Total number of entries across all categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.adlists.len()
            + self.blacklist.len()
            + self.whitelist.len()
            + self.groups.len()
            + self.dns_records.len()
            + self.dhcp.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names_match_teleporter_vocabulary() {
        assert_eq!(Category::Adlists.to_string(), "adlists");
        assert_eq!(Category::DnsRecords.to_string(), "dns_records");
        assert_eq!(Category::Settings.to_string(), "settings");
    }

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let state: InstanceState =
            serde_json::from_str(r#"{"adlists": ["https://example.com/hosts"]}"#).unwrap();
        assert_eq!(state.adlists.len(), 1);
        assert!(state.blacklist.is_empty());
        assert!(state.dhcp.is_empty());
        assert!(!state.is_empty());
        assert_eq!(state.len(), 1);
    }
}
