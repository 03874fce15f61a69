//! Order engine errors.

use thiserror::Error;

use mercato_core::OrderId;

/// Validation failures local to the order engines.
///
/// All are synchronous and all-or-nothing: when an operation fails, no
/// partial state change has occurred.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// Order creation was attempted from a cart with zero line items.
    #[error("cannot create an order from an empty cart")]
    EmptyCart,

    /// An operation referenced an unknown order id.
    #[error("order {0} not found")]
    NotFound(OrderId),

    /// The requested status is not a valid successor of the current status,
    /// or the order is already terminal.
    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition {
        /// Status the order was in.
        from: String,
        /// Status that was requested.
        to: String,
    },

    /// Cancellation was requested on an order past the cancellable window.
    #[error("order {id} can no longer be cancelled (status: {status})")]
    CancellationNotAllowed {
        /// The order in question.
        id: OrderId,
        /// Its current status.
        status: String,
    },
}
