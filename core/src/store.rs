//! Store adapters.
//!
//! [`memory::InMemoryStore`] implements every repository of
//! `courier_common::store`. [`snapshot::Snapshot`] is its on-disk JSON form.

pub mod memory;
pub mod snapshot;

pub use memory::InMemoryStore;
pub use snapshot::{Snapshot, SnapshotError};
