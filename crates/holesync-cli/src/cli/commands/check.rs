//! Configuration validation command.

use anyhow::Result;
use holesync_engine::Config;
use std::path::Path;

/// Report the validated configuration. Loading and validation already
/// happened in the dispatcher; reaching this point means both passed.
pub fn execute(config: &Config, path: &Path) -> Result<()> {
    println!("configuration ok: {}", path.display());
    println!("  master: {}", config.master.host);
    for slave in &config.slaves {
        let selected = u8::from(slave.sync_items.adlists)
            + u8::from(slave.sync_items.blacklist)
            + u8::from(slave.sync_items.whitelist)
            + u8::from(slave.sync_items.regex)
            + u8::from(slave.sync_items.groups)
            + u8::from(slave.sync_items.dns_records)
            + u8::from(slave.sync_items.dhcp)
            + u8::from(slave.sync_items.clients)
            + u8::from(slave.sync_items.settings);
        println!("  slave: {} ({selected} categories selected)", slave.host);
    }
    println!(
        "  retry: {} (max {})",
        if config.sync_retry.enabled { "enabled" } else { "disabled" },
        config.sync_retry.max_retries()
    );

    Ok(())
}
