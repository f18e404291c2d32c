//! Pre-flight status command.

use anyhow::Result;
use holesync_engine::{Config, Syncer};

/// Print whether a cycle may run now and when the last one finished.
pub fn execute(config: &Config) -> Result<()> {
    let syncer = Syncer::new(config.clone());

    println!("master: {}", config.master.host);
    println!("slaves: {}", config.slaves.len());
    println!("can sync: {}", syncer.can_sync());
    match syncer.last_sync() {
        Some(at) => println!("last sync: {at}"),
        None => println!("last sync: never (this process)"),
    }

    Ok(())
}
