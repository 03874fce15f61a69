//! Cart line items and their identity.

use serde::{Deserialize, Serialize};

use mercato_core::{Money, Product, ProductId, ProductOption};

/// Identity of a cart line: the product ID plus a canonical digest of the
/// selected options.
///
/// Adding the same product with the same options twice merges into one line;
/// the same product with different options produces distinct lines. Option
/// order does not matter - the digest sorts the pairs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(String);

impl LineId {
    /// Build the canonical line identity for a product + options combination.
    #[must_use]
    pub fn for_item(product_id: ProductId, options: &[ProductOption]) -> Self {
        let mut pairs: Vec<String> = options
            .iter()
            .map(|o| format!("{}={}", o.name, o.value))
            .collect();
        pairs.sort();
        if pairs.is_empty() {
            Self(product_id.to_string())
        } else {
            Self(format!("{}#{}", product_id, pairs.join(";")))
        }
    }
}

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One product + options + quantity entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Line identity, derived from product and options.
    pub id: LineId,
    /// The product this line was built from.
    pub product_id: ProductId,
    /// Product name, copied for display.
    pub name: String,
    /// Base unit price, before option deltas.
    pub unit_price: Money,
    /// Selected options.
    pub options: Vec<ProductOption>,
    /// Quantity, always >= 1 while the line exists.
    pub quantity: u32,
    /// Line subtotal: effective unit price * quantity.
    pub subtotal: Money,
}

impl CartLine {
    /// Create a new line for `quantity` units of `product`.
    #[must_use]
    pub fn new(product: &Product, quantity: u32, options: Vec<ProductOption>) -> Self {
        let id = LineId::for_item(product.id, &options);
        let mut line = Self {
            id,
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            options,
            quantity,
            subtotal: Money::ZERO,
        };
        line.recompute_subtotal();
        line
    }

    /// Effective per-unit price: base price plus the sum of option deltas.
    #[must_use]
    pub fn effective_unit_price(&self) -> Money {
        self.options
            .iter()
            .fold(self.unit_price, |acc, o| acc + o.price_delta)
    }

    /// Recompute the line subtotal from quantity and effective unit price.
    pub fn recompute_subtotal(&mut self) {
        self.subtotal = self.effective_unit_price() * self.quantity;
    }
}
