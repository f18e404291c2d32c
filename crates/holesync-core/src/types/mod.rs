//! Strongly-typed representations of Pi-hole configuration state and
//! sync cycle outcomes.

mod selection;
mod state;
mod sync;

pub use selection::{ImportOptions, SyncItemSelection};
pub use state::{Category, InstanceState};
pub use sync::{RetryPolicy, SlaveOutcome, SlaveStatus, SyncResult};
