//! Master-to-slave sync engine for Pi-hole configuration state.
//!
//! The engine owns one [`holesync_client::PiholeClient`] per
//! configured instance and orchestrates a full sync cycle: fetch from
//! the master, filter per slave, push to each slave with retry, and
//! aggregate a structured [`holesync_core::SyncResult`]. Repeated
//! triggers are made safe by a 10 second rate-limit window.

pub mod config;
pub mod filter;
pub mod metrics;
pub mod notify;
mod syncer;

pub use config::Config;
pub use syncer::{Syncer, RATE_LIMIT_WINDOW};
pub use holesync_core::{HolesyncError, Result};
