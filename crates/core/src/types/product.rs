//! Catalog entities.
//!
//! Products and categories are supplied by the catalog collaborator and are
//! read-only to the engines - nothing in this workspace mutates catalog data.

use serde::{Deserialize, Serialize};

use super::id::{CategoryId, ProductId};
use super::money::Money;

/// A product from the catalog. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Base unit price, before option deltas.
    pub price: Money,
    /// Category this product belongs to.
    pub category: CategoryId,
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category ID.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
}

/// A selected product option (e.g., size or variant).
///
/// Option price deltas contribute to the line subtotal: the effective unit
/// price of a cart line is the product's base price plus the sum of its
/// option deltas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    /// Option name (e.g., "size").
    pub name: String,
    /// Selected value (e.g., "large").
    pub value: String,
    /// Price adjustment added to the unit price.
    pub price_delta: Money,
}

impl ProductOption {
    /// A zero-delta option.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            price_delta: Money::ZERO,
        }
    }

    /// An option with a price adjustment.
    #[must_use]
    pub fn with_delta(name: impl Into<String>, value: impl Into<String>, delta: Money) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            price_delta: delta,
        }
    }
}
