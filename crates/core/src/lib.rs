//! Mercato Core - Shared domain types.
//!
//! This crate provides common types used across all Mercato components:
//! - `cart` - Shopping cart pricing engine
//! - `orders` - Order lifecycle and rider dispatch engines
//! - `persistence` - Snapshot store collaborator
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no async, no clocks beyond
//! timestamp fields. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, statuses, and the
//!   checkout snapshot that couples the cart and order engines.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
