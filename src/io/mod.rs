//! I/O module
//!
//! Handles snapshot persistence for the account store.
//!
//! # Components
//!
//! - `snapshot` - Whole-store CSV snapshot reading and writing

pub mod snapshot;

pub use snapshot::{load_snapshot, read_snapshot, save_snapshot, write_snapshot, SnapshotRecord};
