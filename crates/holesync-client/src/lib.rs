//! Session-authenticated HTTP client for the Pi-hole FTL API.
//!
//! This crate provides [`PiholeClient`], which talks to exactly one
//! Pi-hole instance and hides session-authentication mechanics from
//! callers: the first request on an unauthenticated client obtains a
//! `(sid, csrf)` pair via `POST /api/auth` and caches it for the
//! lifetime of the client object.

mod client;
mod state;
mod telemetry;
pub mod api;

pub use client::{PiholeClient, PiholeClientBuilder};
pub use telemetry::CallObserver;
pub use holesync_core::{HolesyncError, Result};
