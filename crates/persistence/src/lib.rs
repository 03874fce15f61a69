//! Mercato Persistence - snapshot storage for the engines.
//!
//! The engines expose `snapshot()` / `restore()` pairs; this crate stores
//! those snapshots under string keys. Two backends are provided:
//!
//! - [`JsonFileStore`] - one pretty-printed JSON file per key, for real use.
//! - [`MemoryStore`] - an in-process map, for tests.
//!
//! Loads are forgiving by design: a missing, unreadable, or corrupt snapshot
//! yields `None` (with a warning) so callers start from a fresh engine
//! instead of failing startup.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod json;
pub mod memory;
pub mod store;

pub use error::StoreError;
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use store::SnapshotStore;
