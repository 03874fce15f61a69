//! The order domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mercato_core::{
    CartTotals, CheckoutCart, CheckoutLine, DeliveryAddress, OrderId, OrderStatus, PaymentMethod,
};

/// An order placed from a cart snapshot.
///
/// The line items and monetary breakdown are deep copies taken at creation
/// time - mutating the originating cart afterwards cannot alter a placed
/// order. Orders are never deleted, only transitioned to a terminal status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID, assigned at creation.
    pub id: OrderId,
    /// Line items, copied by value from the cart snapshot.
    pub lines: Vec<CheckoutLine>,
    /// Monetary breakdown, copied from the cart at creation time.
    pub totals: CartTotals,
    /// Promo code active at checkout, if any.
    pub promo_code: Option<String>,
    /// Current lifecycle status.
    pub status: OrderStatus,
    /// Payment method chosen at checkout.
    pub payment_method: PaymentMethod,
    /// Delivery address, copied by value.
    pub delivery_address: DeliveryAddress,
    /// When the order was created.
    pub created_at: DateTime<Utc>,
    /// When the order was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Build a `pending` order from a frozen cart snapshot.
    ///
    /// Assumes the snapshot is non-empty; [`crate::OrderBook::create_order`]
    /// validates that before calling.
    #[must_use]
    pub fn from_checkout(
        id: OrderId,
        cart: &CheckoutCart,
        delivery_address: DeliveryAddress,
        payment_method: PaymentMethod,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            lines: cart.lines.clone(),
            totals: cart.totals,
            promo_code: cart.promo_code.clone(),
            status: OrderStatus::Pending,
            payment_method,
            delivery_address,
            created_at: now,
            updated_at: now,
        }
    }
}
