//! Board operations: applying drops, managing columns, loading generated tasks,
//! JSON snapshots

mod column;
mod drop;
mod generated;
mod snapshot;

pub use drop::DropOutcome;
