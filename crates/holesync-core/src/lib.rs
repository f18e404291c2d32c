//! Core types and errors for the holesync Pi-hole replication tools.
//!
//! This crate provides the foundational types used across the holesync
//! workspace:
//!
//! - **Types**: the instance configuration aggregate, per-slave item
//!   selection, and sync cycle results
//! - **Errors**: comprehensive error handling with [`HolesyncError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use holesync_core::{InstanceState, SyncItemSelection, Result};
//!
//! fn count_entries(state: &InstanceState) -> usize {
//!     state.adlists.len() + state.blacklist.len() + state.whitelist.len()
//! }
//! ```

mod error;
pub mod types;

pub use error::{AuthFailure, HolesyncError, Result};
pub use types::*;
