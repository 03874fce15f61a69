//! The cart engine: line items plus synchronously recomputed totals.

use serde::{Deserialize, Serialize};
use tracing::debug;

use mercato_core::{CartTotals, CheckoutCart, CheckoutLine, Money, Product, ProductOption};

use crate::error::CartError;
use crate::line::{CartLine, LineId};
use crate::pricing::PricingConfig;
use crate::promo::PromoLookup;

/// An applied promo code and the flat discount it grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ActivePromo {
    code: String,
    discount: Money,
}

/// Serializable cart state for the persistence collaborator.
///
/// Only the source-of-truth state is captured (lines and active promo);
/// derived totals are recomputed on restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    lines: Vec<CartLine>,
    promo: Option<ActivePromo>,
}

/// One shopping cart for one session.
///
/// Every mutating operation recomputes the aggregate totals before it
/// returns, so the invariant
/// `total == max(0, subtotal + tax + delivery_fee - discount)` holds for
/// every observable state.
#[derive(Debug, Clone)]
pub struct CartEngine {
    config: PricingConfig,
    lines: Vec<CartLine>,
    promo: Option<ActivePromo>,
    totals: CartTotals,
}

impl Default for CartEngine {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

impl CartEngine {
    /// Create an empty cart with the given pricing configuration.
    #[must_use]
    pub fn new(config: PricingConfig) -> Self {
        Self {
            config,
            lines: Vec::new(),
            promo: None,
            totals: CartTotals::default(),
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add `quantity` units of `product` with the given options.
    ///
    /// If a line with the same product + options identity already exists its
    /// quantity accumulates; otherwise a new line is appended.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ZeroQuantity`] if `quantity` is zero. The cart is
    /// unchanged in that case.
    pub fn add_item(
        &mut self,
        product: &Product,
        quantity: u32,
        options: Vec<ProductOption>,
    ) -> Result<LineId, CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        let id = LineId::for_item(product.id, &options);
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.quantity = line.quantity.saturating_add(quantity);
            line.recompute_subtotal();
        } else {
            self.lines.push(CartLine::new(product, quantity, options));
        }
        debug!(line = %id, quantity, "item added to cart");
        self.recompute();
        Ok(id)
    }

    /// Remove a line. A no-op (not an error) if the line is absent.
    ///
    /// If this empties the cart, the active promo code is cleared and the
    /// discount reset to zero.
    pub fn remove_item(&mut self, id: &LineId) {
        self.lines.retain(|l| &l.id != id);
        if self.lines.is_empty() {
            self.promo = None;
        }
        self.recompute();
    }

    /// Overwrite a line's quantity.
    ///
    /// A quantity of zero behaves exactly like [`Self::remove_item`],
    /// including the absent no-op.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] for a positive quantity on an
    /// unknown line.
    pub fn set_quantity(&mut self, id: &LineId, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            self.remove_item(id);
            return Ok(());
        }

        let line = self
            .lines
            .iter_mut()
            .find(|l| &l.id == id)
            .ok_or_else(|| CartError::LineNotFound(id.clone()))?;
        line.quantity = quantity;
        line.recompute_subtotal();
        self.recompute();
        Ok(())
    }

    /// Empty the cart: no lines, no promo, all derived amounts zero.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.promo = None;
        self.recompute();
    }

    /// Apply a promo code, validating it against the injected lookup.
    ///
    /// The code is normalized (trimmed, uppercased) before lookup. Returns
    /// `true` and sets the discount on a match; returns `false` and leaves
    /// the cart unchanged otherwise. A rejected code is a recoverable result,
    /// not an error - callers may simply retry with another code.
    pub async fn apply_promo_code(&mut self, code: &str, promos: &impl PromoLookup) -> bool {
        let normalized = code.trim().to_uppercase();
        match promos.lookup(&normalized).await {
            Some(discount) => {
                debug!(code = %normalized, %discount, "promo code applied");
                self.promo = Some(ActivePromo {
                    code: normalized,
                    discount,
                });
                self.recompute();
                true
            }
            None => {
                debug!(code = %normalized, "promo code rejected");
                false
            }
        }
    }

    /// Clear the active promo code and discount. Never fails; idempotent.
    pub fn remove_promo_code(&mut self) {
        self.promo = None;
        self.recompute();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of lines in the cart.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of line subtotals.
    #[must_use]
    pub const fn subtotal(&self) -> Money {
        self.totals.subtotal
    }

    /// Tax on the subtotal.
    #[must_use]
    pub const fn tax(&self) -> Money {
        self.totals.tax
    }

    /// Flat delivery fee; zero iff the cart is empty.
    #[must_use]
    pub const fn delivery_fee(&self) -> Money {
        self.totals.delivery_fee
    }

    /// Active promo discount; zero when no promo is applied.
    #[must_use]
    pub const fn discount(&self) -> Money {
        self.totals.discount
    }

    /// Grand total, floored at zero.
    #[must_use]
    pub const fn total(&self) -> Money {
        self.totals.total
    }

    /// The full monetary breakdown.
    #[must_use]
    pub const fn totals(&self) -> CartTotals {
        self.totals
    }

    /// The active promo code, if any.
    #[must_use]
    pub fn promo_code(&self) -> Option<&str> {
        self.promo.as_ref().map(|p| p.code.as_str())
    }

    // =========================================================================
    // Checkout & persistence
    // =========================================================================

    /// Freeze the cart into a by-value snapshot for order creation.
    ///
    /// The caller is responsible for clearing the cart after the order is
    /// successfully created - the engines stay decoupled.
    #[must_use]
    pub fn checkout(&self) -> CheckoutCart {
        CheckoutCart {
            lines: self
                .lines
                .iter()
                .map(|l| CheckoutLine {
                    product_id: l.product_id,
                    name: l.name.clone(),
                    unit_price: l.effective_unit_price(),
                    options: l.options.clone(),
                    quantity: l.quantity,
                    subtotal: l.subtotal,
                })
                .collect(),
            totals: self.totals,
            promo_code: self.promo.as_ref().map(|p| p.code.clone()),
        }
    }

    /// Capture the cart's source-of-truth state for persistence.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.lines.clone(),
            promo: self.promo.clone(),
        }
    }

    /// Replace the cart's state with a previously captured snapshot.
    ///
    /// Derived totals are recomputed, so a snapshot taken under a different
    /// pricing configuration reconciles against the current one.
    pub fn restore(&mut self, snapshot: CartSnapshot) {
        self.lines = snapshot.lines;
        self.promo = snapshot.promo;
        self.recompute();
    }

    /// Recompute every derived amount from the current lines and promo.
    fn recompute(&mut self) {
        let subtotal: Money = self.lines.iter().map(|l| l.subtotal).sum();
        let tax = subtotal.times(self.config.tax_rate);
        let delivery_fee = if subtotal.is_positive() {
            self.config.delivery_fee
        } else {
            Money::ZERO
        };
        let discount = self.promo.as_ref().map_or(Money::ZERO, |p| p.discount);
        let total = (subtotal + tax + delivery_fee).saturating_sub(discount);
        self.totals = CartTotals {
            subtotal,
            tax,
            delivery_fee,
            discount,
            total,
        };
    }
}
