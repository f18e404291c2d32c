//! Typed endpoint modules for the FTL API.

mod dns;
mod domains;
mod groups;
mod lists;
mod teleporter;

pub use dns::{DnsApi, DnsRecordEntry};
pub use domains::{DomainEntry, DomainKind, DomainsApi};
pub use groups::{GroupEntry, GroupsApi};
pub use lists::{ListEntry, ListsApi};
pub use teleporter::TeleporterApi;
