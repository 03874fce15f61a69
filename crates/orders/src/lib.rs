//! Mercato Orders - order lifecycle and rider dispatch engines.
//!
//! Two caller-owned state machines over the shared status enums from
//! `mercato-core`:
//!
//! - [`OrderBook`] - the customer/vendor view: orders created from frozen
//!   cart snapshots, advanced along `pending -> processing -> shipped ->
//!   delivered` with `cancelled` as the alternate terminal.
//! - [`DispatchBoard`] - the rider view: delivery offers partitioned into
//!   three disjoint buckets (available / active / history), advanced along
//!   `assigned -> accepted -> picked -> in_transit -> delivered`.
//!
//! Every mutating operation is all-or-nothing: a validation failure leaves
//! statuses, timestamps, and bucket membership untouched.
//!
//! The [`catalog`] module hosts the read-only product catalog collaborator.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod book;
pub mod catalog;
pub mod dispatch;
pub mod error;
pub mod order;

pub use book::{OrderBook, OrderBookSnapshot};
pub use catalog::ProductCatalog;
pub use dispatch::{DeliveryOrder, DispatchBoard, DispatchSnapshot, GeoPoint};
pub use error::OrderError;
pub use order::Order;
