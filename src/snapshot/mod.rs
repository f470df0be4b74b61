//! Snapshot persistence for locally stored collections.
//!
//! A snapshot is an entire collection serialised as one JSON array under a
//! named key. Stores write a fresh snapshot after every mutation and read it
//! back once when they are opened. The module follows the same split as the
//! other bounded contexts:
//!
//! - Port contract in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod ports;

pub use ports::{SnapshotError, SnapshotResult, SnapshotStore};
