//! Status enums for orders and rider deliveries.
//!
//! Both enums are closed tagged types with explicit transition tables -
//! free-form status strings are not accepted anywhere in the engines. The
//! happy paths are one-directional chains; `Cancelled` is reachable from any
//! non-terminal state and, together with `Delivered`, is absorbing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A status string that does not name a known status.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized status: {0}")]
pub struct ParseStatusError(String);

/// Order status as seen by customers and vendors.
///
/// Happy path: `Pending -> Processing -> Shipped -> Delivered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Whether no further transition is permitted out of this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Whether an order in this status is still inside the cancellation window.
    #[must_use]
    pub const fn is_cancellable(self) -> bool {
        matches!(self, Self::Pending | Self::Processing)
    }

    /// Whether `next` is a permitted successor of this status.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        match (self, next) {
            (Self::Pending, Self::Processing)
            | (Self::Processing, Self::Shipped)
            | (Self::Shipped, Self::Delivered) => true,
            (current, Self::Cancelled) => !current.is_terminal(),
            _ => false,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Processing => write!(f, "processing"),
            Self::Shipped => write!(f, "shipped"),
            Self::Delivered => write!(f, "delivered"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseStatusError(s.to_owned())),
        }
    }
}

/// Delivery status as seen by riders.
///
/// Happy path: `Assigned -> Accepted -> Picked -> InTransit -> Delivered`.
/// An order is `Assigned` while it sits in the available bucket; accepting it
/// moves it to the active bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    #[default]
    Assigned,
    Accepted,
    Picked,
    InTransit,
    Delivered,
    Cancelled,
}

impl DeliveryStatus {
    /// Whether no further transition is permitted out of this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Whether a delivery in this status is still inside the cancellation window.
    ///
    /// Riders can back out before pickup, never after.
    #[must_use]
    pub const fn is_cancellable(self) -> bool {
        matches!(self, Self::Assigned | Self::Accepted)
    }

    /// Whether `next` is a permitted successor of this status.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        match (self, next) {
            (Self::Assigned, Self::Accepted)
            | (Self::Accepted, Self::Picked)
            | (Self::Picked, Self::InTransit)
            | (Self::InTransit, Self::Delivered) => true,
            (current, Self::Cancelled) => !current.is_terminal(),
            _ => false,
        }
    }
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assigned => write!(f, "assigned"),
            Self::Accepted => write!(f, "accepted"),
            Self::Picked => write!(f, "picked"),
            Self::InTransit => write!(f, "in_transit"),
            Self::Delivered => write!(f, "delivered"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for DeliveryStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "assigned" => Ok(Self::Assigned),
            "accepted" => Ok(Self::Accepted),
            "picked" => Ok(Self::Picked),
            "in_transit" => Ok(Self::InTransit),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseStatusError(s.to_owned())),
        }
    }
}
