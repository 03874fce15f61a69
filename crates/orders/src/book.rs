//! The order book: the customer/vendor view of the order collection.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use mercato_core::{CheckoutCart, DeliveryAddress, OrderId, OrderStatus, PaymentMethod};

use crate::error::OrderError;
use crate::order::Order;

/// Serializable order book state for the persistence collaborator.
///
/// The id counter is part of the snapshot so restored books keep assigning
/// unique ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    orders: Vec<Order>,
    next_id: i64,
}

/// An append-only collection of orders with validated status transitions.
#[derive(Debug, Clone)]
pub struct OrderBook {
    orders: Vec<Order>,
    next_id: i64,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBook {
    /// Create an empty order book.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            orders: Vec::new(),
            next_id: 1,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Create a `pending` order from a frozen cart snapshot.
    ///
    /// Line items and totals are deep-copied; the originating cart is NOT
    /// cleared here - that is the caller's responsibility, keeping the cart
    /// and order engines independently testable.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyCart`] if the snapshot has no line items.
    pub fn create_order(
        &mut self,
        cart: &CheckoutCart,
        delivery_address: DeliveryAddress,
        payment_method: PaymentMethod,
    ) -> Result<Order, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let id = OrderId::new(self.next_id);
        self.next_id += 1;

        let order = Order::from_checkout(id, cart, delivery_address, payment_method);
        debug!(order = %id, total = %order.totals.total, "order created");
        self.orders.push(order.clone());
        Ok(order)
    }

    /// Advance an order to `new_status`.
    ///
    /// # Errors
    ///
    /// - [`OrderError::NotFound`] for an unknown id.
    /// - [`OrderError::InvalidTransition`] if the order is terminal or
    ///   `new_status` is not a permitted successor. The order is untouched.
    pub fn update_status(&mut self, id: OrderId, new_status: OrderStatus) -> Result<(), OrderError> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(OrderError::NotFound(id))?;

        if !order.status.can_transition_to(new_status) {
            return Err(OrderError::InvalidTransition {
                from: order.status.to_string(),
                to: new_status.to_string(),
            });
        }

        debug!(order = %id, from = %order.status, to = %new_status, "order status updated");
        order.status = new_status;
        order.updated_at = Utc::now();
        Ok(())
    }

    /// Cancel an order.
    ///
    /// Cancellation is a narrower operation than a generic transition to
    /// `cancelled`: it is only permitted while the order is still inside the
    /// cancellation window (`pending` or `processing`).
    ///
    /// # Errors
    ///
    /// - [`OrderError::NotFound`] for an unknown id.
    /// - [`OrderError::InvalidTransition`] if the order is already terminal
    ///   (including already cancelled).
    /// - [`OrderError::CancellationNotAllowed`] if the order is live but past
    ///   the window (e.g., already shipped).
    pub fn cancel_order(&mut self, id: OrderId) -> Result<(), OrderError> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(OrderError::NotFound(id))?;

        if order.status.is_terminal() {
            return Err(OrderError::InvalidTransition {
                from: order.status.to_string(),
                to: OrderStatus::Cancelled.to_string(),
            });
        }
        if !order.status.is_cancellable() {
            return Err(OrderError::CancellationNotAllowed {
                id,
                status: order.status.to_string(),
            });
        }

        debug!(order = %id, from = %order.status, "order cancelled");
        order.status = OrderStatus::Cancelled;
        order.updated_at = Utc::now();
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All orders, in creation order.
    #[must_use]
    pub fn fetch_all(&self) -> &[Order] {
        &self.orders
    }

    /// Look up one order by id.
    #[must_use]
    pub fn fetch_by_id(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// All orders currently in `status`.
    #[must_use]
    pub fn filter_by_status(&self, status: OrderStatus) -> Vec<&Order> {
        self.orders.iter().filter(|o| o.status == status).collect()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Capture the book's state for persistence.
    #[must_use]
    pub fn snapshot(&self) -> OrderBookSnapshot {
        OrderBookSnapshot {
            orders: self.orders.clone(),
            next_id: self.next_id,
        }
    }

    /// Replace the book's state with a previously captured snapshot.
    pub fn restore(&mut self, snapshot: OrderBookSnapshot) {
        self.orders = snapshot.orders;
        self.next_id = snapshot.next_id;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mercato_core::{CartTotals, CheckoutLine, Money, ProductId};

    fn address() -> DeliveryAddress {
        DeliveryAddress::new("12 Via Roma", "Torino", "10121")
    }

    fn checkout() -> CheckoutCart {
        let subtotal = Money::from_cents(2198);
        let tax = subtotal.times(rust_decimal::Decimal::new(5, 2));
        let delivery_fee = Money::from_major(5);
        CheckoutCart {
            lines: vec![CheckoutLine {
                product_id: ProductId::new(1),
                name: "Espresso Beans".to_string(),
                unit_price: Money::from_cents(1099),
                options: vec![],
                quantity: 2,
                subtotal,
            }],
            totals: CartTotals {
                subtotal,
                tax,
                delivery_fee,
                discount: Money::ZERO,
                total: subtotal + tax + delivery_fee,
            },
            promo_code: None,
        }
    }

    fn empty_checkout() -> CheckoutCart {
        CheckoutCart {
            lines: vec![],
            totals: CartTotals::default(),
            promo_code: None,
        }
    }

    #[test]
    fn test_create_order_from_empty_cart_fails() {
        let mut book = OrderBook::new();
        let err = book
            .create_order(&empty_checkout(), address(), PaymentMethod::Card)
            .unwrap_err();
        assert_eq!(err, OrderError::EmptyCart);
        assert!(book.fetch_all().is_empty());
    }

    #[test]
    fn test_create_order_starts_pending_with_unique_ids() {
        let mut book = OrderBook::new();
        let first = book
            .create_order(&checkout(), address(), PaymentMethod::Card)
            .unwrap();
        let second = book
            .create_order(&checkout(), address(), PaymentMethod::Cash)
            .unwrap();

        assert_eq!(first.status, OrderStatus::Pending);
        assert_ne!(first.id, second.id);
        assert_eq!(book.fetch_all().len(), 2);
    }

    #[test]
    fn test_order_copies_cart_totals() {
        let mut book = OrderBook::new();
        let cart = checkout();
        let order = book
            .create_order(&cart, address(), PaymentMethod::Card)
            .unwrap();

        assert_eq!(order.totals, cart.totals);
        assert_eq!(order.lines, cart.lines);
    }

    #[test]
    fn test_update_status_happy_path() {
        let mut book = OrderBook::new();
        let id = book
            .create_order(&checkout(), address(), PaymentMethod::Card)
            .unwrap()
            .id;

        book.update_status(id, OrderStatus::Processing).unwrap();
        book.update_status(id, OrderStatus::Shipped).unwrap();
        book.update_status(id, OrderStatus::Delivered).unwrap();
        assert_eq!(
            book.fetch_by_id(id).unwrap().status,
            OrderStatus::Delivered
        );
    }

    #[test]
    fn test_update_status_rejects_skips_without_mutation() {
        let mut book = OrderBook::new();
        let id = book
            .create_order(&checkout(), address(), PaymentMethod::Card)
            .unwrap()
            .id;
        let before = book.fetch_by_id(id).unwrap().clone();

        let err = book.update_status(id, OrderStatus::Delivered).unwrap_err();
        assert!(matches!(err, OrderError::InvalidTransition { .. }));
        assert_eq!(book.fetch_by_id(id).unwrap(), &before);
    }

    #[test]
    fn test_update_status_unknown_order() {
        let mut book = OrderBook::new();
        let err = book
            .update_status(OrderId::new(404), OrderStatus::Processing)
            .unwrap_err();
        assert_eq!(err, OrderError::NotFound(OrderId::new(404)));
    }

    #[test]
    fn test_terminal_orders_are_frozen() {
        let mut book = OrderBook::new();
        let id = book
            .create_order(&checkout(), address(), PaymentMethod::Card)
            .unwrap()
            .id;
        book.update_status(id, OrderStatus::Processing).unwrap();
        book.update_status(id, OrderStatus::Shipped).unwrap();
        book.update_status(id, OrderStatus::Delivered).unwrap();

        for next in [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Cancelled,
        ] {
            assert!(book.update_status(id, next).is_err());
        }
        assert_eq!(
            book.fetch_by_id(id).unwrap().status,
            OrderStatus::Delivered
        );
    }

    #[test]
    fn test_cancel_pending_then_cancel_again_fails() {
        let mut book = OrderBook::new();
        let id = book
            .create_order(&checkout(), address(), PaymentMethod::Card)
            .unwrap()
            .id;

        book.cancel_order(id).unwrap();
        assert_eq!(
            book.fetch_by_id(id).unwrap().status,
            OrderStatus::Cancelled
        );

        let err = book.cancel_order(id).unwrap_err();
        assert!(matches!(err, OrderError::InvalidTransition { .. }));
    }

    #[test]
    fn test_cancel_shipped_is_not_allowed() {
        let mut book = OrderBook::new();
        let id = book
            .create_order(&checkout(), address(), PaymentMethod::Card)
            .unwrap()
            .id;
        book.update_status(id, OrderStatus::Processing).unwrap();
        book.update_status(id, OrderStatus::Shipped).unwrap();

        let err = book.cancel_order(id).unwrap_err();
        assert!(matches!(err, OrderError::CancellationNotAllowed { .. }));
        assert_eq!(book.fetch_by_id(id).unwrap().status, OrderStatus::Shipped);
    }

    #[test]
    fn test_cancel_processing_is_allowed() {
        let mut book = OrderBook::new();
        let id = book
            .create_order(&checkout(), address(), PaymentMethod::Card)
            .unwrap()
            .id;
        book.update_status(id, OrderStatus::Processing).unwrap();
        book.cancel_order(id).unwrap();
        assert_eq!(
            book.fetch_by_id(id).unwrap().status,
            OrderStatus::Cancelled
        );
    }

    #[test]
    fn test_filter_by_status() {
        let mut book = OrderBook::new();
        let first = book
            .create_order(&checkout(), address(), PaymentMethod::Card)
            .unwrap()
            .id;
        book.create_order(&checkout(), address(), PaymentMethod::Card)
            .unwrap();
        book.update_status(first, OrderStatus::Processing).unwrap();

        assert_eq!(book.filter_by_status(OrderStatus::Pending).len(), 1);
        assert_eq!(book.filter_by_status(OrderStatus::Processing).len(), 1);
        assert!(book.filter_by_status(OrderStatus::Delivered).is_empty());
    }

    #[test]
    fn test_snapshot_preserves_id_counter() {
        let mut book = OrderBook::new();
        let first = book
            .create_order(&checkout(), address(), PaymentMethod::Card)
            .unwrap()
            .id;

        let json = serde_json::to_string(&book.snapshot()).unwrap();
        let snapshot: OrderBookSnapshot = serde_json::from_str(&json).unwrap();

        let mut restored = OrderBook::new();
        restored.restore(snapshot);
        let second = restored
            .create_order(&checkout(), address(), PaymentMethod::Card)
            .unwrap()
            .id;

        assert_ne!(first, second);
        assert_eq!(restored.fetch_all().len(), 2);
    }
}
