//! holesync - replicate Pi-hole configuration from a master to its
//! slaves.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    holesync_cli::run().await
}
