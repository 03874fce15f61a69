//! Checkout snapshot types - the seam between the cart and order engines.
//!
//! `CartEngine::checkout` produces a [`CheckoutCart`], a frozen by-value copy
//! of the cart's lines and totals. `OrderBook::create_order` consumes it.
//! Because everything here is owned data, later cart mutations can never
//! retroactively alter a placed order, and the two engines remain
//! independently testable.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::money::Money;
use super::product::ProductOption;

/// One cart line, copied by value at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutLine {
    /// The product this line was built from.
    pub product_id: ProductId,
    /// Product name at the time of checkout.
    pub name: String,
    /// Effective unit price at the time of checkout: base price plus the
    /// sum of option deltas, so `subtotal == unit_price * quantity`.
    pub unit_price: Money,
    /// Selected options (deltas already folded into `unit_price`).
    pub options: Vec<ProductOption>,
    /// Quantity, always >= 1.
    pub quantity: u32,
    /// Line subtotal: unit price * quantity.
    pub subtotal: Money,
}

/// The monetary breakdown of a cart or order.
///
/// Invariant: `total == max(0, subtotal + tax + delivery_fee - discount)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CartTotals {
    /// Sum of line subtotals.
    pub subtotal: Money,
    /// Tax on the subtotal.
    pub tax: Money,
    /// Flat delivery fee, zero iff the cart is empty.
    pub delivery_fee: Money,
    /// Active promo discount, zero when no promo is applied.
    pub discount: Money,
    /// Grand total, floored at zero.
    pub total: Money,
}

/// A frozen copy of a cart, ready for order creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutCart {
    /// Line items, in display order.
    pub lines: Vec<CheckoutLine>,
    /// Monetary breakdown at the time of checkout.
    pub totals: CartTotals,
    /// Promo code that produced the discount, if any.
    pub promo_code: Option<String>,
}

impl CheckoutCart {
    /// Whether the snapshot has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A delivery address, copied by value into orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryAddress {
    /// Street address.
    pub street: String,
    /// City.
    pub city: String,
    /// Postal or ZIP code.
    pub postal_code: String,
}

impl DeliveryAddress {
    /// Create a new address.
    #[must_use]
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            postal_code: postal_code.into(),
        }
    }
}

/// Payment method chosen at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Card,
    Cash,
    Wallet,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Card => write!(f, "card"),
            Self::Cash => write!(f, "cash"),
            Self::Wallet => write!(f, "wallet"),
        }
    }
}
