//! Core types for Mercato.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod checkout;
pub mod id;
pub mod money;
pub mod product;
pub mod status;

pub use checkout::{CartTotals, CheckoutCart, CheckoutLine, DeliveryAddress, PaymentMethod};
pub use id::*;
pub use money::Money;
pub use product::{Category, Product, ProductOption};
pub use status::*;
