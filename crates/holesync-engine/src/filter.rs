//! Per-slave filtering of master state.

use holesync_core::{ImportOptions, InstanceState, SyncItemSelection};

/// Derive a slave's view of the master state.
///
/// Pure: each category is copied iff its selection flag is true and is
/// otherwise empty, never partially populated. A false flag guarantees
/// the category is not transmitted regardless of master content.
#[must_use]
pub fn filter_state(master: &InstanceState, selection: &SyncItemSelection) -> InstanceState {
    let mut filtered = InstanceState::default();

    if selection.adlists {
        filtered.adlists = master.adlists.clone();
    }
    if selection.blacklist {
        filtered.blacklist = master.blacklist.clone();
    }
    if selection.whitelist {
        filtered.whitelist = master.whitelist.clone();
    }
    if selection.groups {
        filtered.groups = master.groups.clone();
    }
    if selection.dns_records {
        filtered.dns_records = master.dns_records.clone();
    }
    if selection.dhcp {
        filtered.dhcp = master.dhcp.clone();
    }

    filtered
}

/// Project the selection into the snapshot transport's import options
#[must_use]
pub fn build_import_options(selection: &SyncItemSelection) -> ImportOptions {
    ImportOptions::from(*selection)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn master() -> InstanceState {
        InstanceState {
            adlists: vec!["https://hosts.example/a.txt".into(), "https://hosts.example/b.txt".into()],
            blacklist: vec!["ads.example.com".into()],
            whitelist: vec!["good.example.com".into()],
            groups: vec!["Default".into()],
            dns_records: vec!["nas.lan=192.168.1.5".into()],
            dhcp: vec!["aa:bb:cc:dd:ee:ff,192.168.1.50".into()],
        }
    }

    #[test]
    fn category_included_iff_flag_set() {
        let selection = SyncItemSelection {
            adlists: true,
            blacklist: false,
            whitelist: true,
            groups: false,
            dns_records: true,
            dhcp: false,
            ..Default::default()
        };

        let filtered = filter_state(&master(), &selection);
        assert_eq!(filtered.adlists, master().adlists);
        assert!(filtered.blacklist.is_empty());
        assert_eq!(filtered.whitelist, master().whitelist);
        assert!(filtered.groups.is_empty());
        assert_eq!(filtered.dns_records, master().dns_records);
        assert!(filtered.dhcp.is_empty());
    }

    #[test]
    fn empty_selection_yields_empty_state() {
        let filtered = filter_state(&master(), &SyncItemSelection::default());
        assert!(filtered.is_empty());
    }

    #[test]
    fn full_selection_copies_everything() {
        let filtered = filter_state(&master(), &SyncItemSelection::all());
        assert_eq!(filtered, master());
    }

    #[test]
    fn adlists_only_scenario() {
        // Master {adlists:[a,b], blacklist:[c]} with {adlists:true,
        // blacklist:false} must push adlists only.
        let selection = SyncItemSelection {
            adlists: true,
            ..Default::default()
        };

        let filtered = filter_state(&master(), &selection);
        assert_eq!(filtered.adlists.len(), 2);
        assert!(filtered.blacklist.is_empty());
    }

    #[test]
    fn import_options_are_a_direct_projection() {
        let selection = SyncItemSelection {
            adlists: true,
            regex: true,
            settings: true,
            ..Default::default()
        };

        let import = build_import_options(&selection);
        assert!(import.adlists);
        assert!(import.regex);
        assert!(import.settings);
        assert!(!import.blacklist);
        assert!(!import.clients);

        let json = serde_json::to_value(import).unwrap();
        assert_eq!(json["adlists"], true);
        assert_eq!(json["dns_records"], false);
    }
}
