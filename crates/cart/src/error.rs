//! Cart engine errors.
//!
//! A rejected promo code is NOT an error - it surfaces as `false` from
//! [`crate::CartEngine::apply_promo_code`] so callers can retry with another
//! code without an error path.

use thiserror::Error;

use crate::line::LineId;

/// Validation failures local to the cart engine.
///
/// Every failure is all-or-nothing: the cart state is untouched when an
/// operation returns an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// `add_item` was called with a zero quantity.
    #[error("cannot add an item with zero quantity")]
    ZeroQuantity,

    /// `set_quantity` referenced a line that is not in the cart.
    #[error("line {0} not found in cart")]
    LineNotFound(LineId),
}
