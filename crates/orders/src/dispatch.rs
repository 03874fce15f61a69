//! The dispatch board: the rider view of deliveries.
//!
//! Every tracked delivery lives in exactly one of three buckets:
//!
//! - `available` - offers waiting for a rider (`assigned`)
//! - `active` - accepted deliveries in progress
//! - `history` - terminal deliveries (`delivered` or `cancelled`)
//!
//! Bucket migration is remove-then-insert; callers only ever observe the
//! post-state. [`DispatchBoard::accept_order`] is the single operation that
//! crosses the available -> active boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use mercato_core::{DeliveryAddress, DeliveryStatus, Money, OrderId};

use crate::error::OrderError;
use crate::order::Order;

/// A geographic coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl GeoPoint {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// The rider-facing view of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryOrder {
    /// The order this delivery fulfils.
    pub id: OrderId,
    /// Order total, for display to the rider.
    pub total: Money,
    /// Dropoff address.
    pub delivery_address: DeliveryAddress,
    /// Pickup coordinates (the vendor).
    pub pickup: GeoPoint,
    /// Dropoff coordinates (the customer).
    pub dropoff: GeoPoint,
    /// Route distance in kilometres.
    pub distance_km: f64,
    /// Rider earnings for this delivery.
    pub earnings: Money,
    /// Current delivery status.
    pub status: DeliveryStatus,
    /// When the offer was created.
    pub created_at: DateTime<Utc>,
    /// When the delivery was last updated.
    pub updated_at: DateTime<Utc>,
}

impl DeliveryOrder {
    /// Build an `assigned` delivery offer from a placed order.
    #[must_use]
    pub fn from_order(
        order: &Order,
        pickup: GeoPoint,
        dropoff: GeoPoint,
        distance_km: f64,
        earnings: Money,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: order.id,
            total: order.totals.total,
            delivery_address: order.delivery_address.clone(),
            pickup,
            dropoff,
            distance_km,
            earnings,
            status: DeliveryStatus::Assigned,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Which bucket a delivery currently lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Available,
    Active,
    History,
}

/// Serializable dispatch board state for the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchSnapshot {
    available: Vec<DeliveryOrder>,
    active: Vec<DeliveryOrder>,
    history: Vec<DeliveryOrder>,
}

/// Rider deliveries partitioned into three disjoint buckets.
///
/// Invariant: an order id appears in at most one bucket at any time.
#[derive(Debug, Clone, Default)]
pub struct DispatchBoard {
    available: Vec<DeliveryOrder>,
    active: Vec<DeliveryOrder>,
    history: Vec<DeliveryOrder>,
}

impl DispatchBoard {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Post a delivery offer into the `available` bucket.
    ///
    /// Returns `false` without mutating if the order id is already tracked in
    /// any bucket - an id can never appear twice.
    pub fn offer(&mut self, mut order: DeliveryOrder) -> bool {
        if self.locate(order.id).is_some() {
            warn!(order = %order.id, "duplicate delivery offer ignored");
            return false;
        }
        order.status = DeliveryStatus::Assigned;
        debug!(order = %order.id, "delivery offer posted");
        self.available.push(order);
        true
    }

    /// Accept an available offer, moving it to the `active` bucket.
    ///
    /// This is the only operation that crosses the available -> active
    /// boundary.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NotFound`] unless the id is present in
    /// `available`.
    pub fn accept_order(&mut self, id: OrderId) -> Result<(), OrderError> {
        let position = self
            .available
            .iter()
            .position(|o| o.id == id)
            .ok_or(OrderError::NotFound(id))?;

        let mut order = self.available.remove(position);
        order.status = DeliveryStatus::Accepted;
        order.updated_at = Utc::now();
        debug!(order = %id, "delivery accepted");
        self.active.push(order);
        Ok(())
    }

    /// Advance an active delivery to `new_status`.
    ///
    /// A valid transition to a terminal status migrates the delivery from
    /// `active` to `history`; any other valid transition updates it in place.
    ///
    /// # Errors
    ///
    /// - [`OrderError::NotFound`] for an untracked id.
    /// - [`OrderError::InvalidTransition`] if the delivery is not in
    ///   `active` (an available offer must be accepted first; a history
    ///   entry is terminal), or if `new_status` is not a permitted
    ///   successor. The board is untouched.
    pub fn update_status(
        &mut self,
        id: OrderId,
        new_status: DeliveryStatus,
    ) -> Result<(), OrderError> {
        let (bucket, position) = self.locate(id).ok_or(OrderError::NotFound(id))?;

        let current = match bucket {
            Bucket::Active => self.active.get(position),
            Bucket::Available => self.available.get(position),
            Bucket::History => self.history.get(position),
        }
        .map(|o| o.status)
        .ok_or(OrderError::NotFound(id))?;

        if bucket != Bucket::Active || !current.can_transition_to(new_status) {
            return Err(OrderError::InvalidTransition {
                from: current.to_string(),
                to: new_status.to_string(),
            });
        }

        debug!(order = %id, from = %current, to = %new_status, "delivery status updated");
        if new_status.is_terminal() {
            let mut order = self.active.remove(position);
            order.status = new_status;
            order.updated_at = Utc::now();
            self.history.push(order);
        } else if let Some(order) = self.active.get_mut(position) {
            order.status = new_status;
            order.updated_at = Utc::now();
        }
        Ok(())
    }

    /// Cancel a delivery that has not been picked up yet.
    ///
    /// Cancellable deliveries (`assigned` offers and `accepted` active
    /// deliveries) move to `history` as `cancelled`.
    ///
    /// # Errors
    ///
    /// - [`OrderError::NotFound`] for an untracked id.
    /// - [`OrderError::InvalidTransition`] if the delivery is already
    ///   terminal.
    /// - [`OrderError::CancellationNotAllowed`] once the parcel is picked or
    ///   in transit.
    pub fn cancel_order(&mut self, id: OrderId) -> Result<(), OrderError> {
        let (bucket, position) = self.locate(id).ok_or(OrderError::NotFound(id))?;

        let current = match bucket {
            Bucket::Available => self.available.get(position),
            Bucket::Active => self.active.get(position),
            Bucket::History => self.history.get(position),
        }
        .map(|o| o.status)
        .ok_or(OrderError::NotFound(id))?;

        if current.is_terminal() {
            return Err(OrderError::InvalidTransition {
                from: current.to_string(),
                to: DeliveryStatus::Cancelled.to_string(),
            });
        }
        if !current.is_cancellable() {
            return Err(OrderError::CancellationNotAllowed {
                id,
                status: current.to_string(),
            });
        }

        let mut order = match bucket {
            Bucket::Available => self.available.remove(position),
            Bucket::Active => self.active.remove(position),
            // Terminal check above already returned for history entries.
            Bucket::History => return Err(OrderError::NotFound(id)),
        };
        debug!(order = %id, from = %current, "delivery cancelled");
        order.status = DeliveryStatus::Cancelled;
        order.updated_at = Utc::now();
        self.history.push(order);
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Offers waiting for a rider.
    #[must_use]
    pub fn available(&self) -> &[DeliveryOrder] {
        &self.available
    }

    /// Accepted deliveries in progress.
    #[must_use]
    pub fn active(&self) -> &[DeliveryOrder] {
        &self.active
    }

    /// Completed and cancelled deliveries.
    #[must_use]
    pub fn history(&self) -> &[DeliveryOrder] {
        &self.history
    }

    /// Look up a delivery in any bucket.
    #[must_use]
    pub fn fetch(&self, id: OrderId) -> Option<&DeliveryOrder> {
        self.available
            .iter()
            .chain(&self.active)
            .chain(&self.history)
            .find(|o| o.id == id)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Capture the board's state for persistence.
    #[must_use]
    pub fn snapshot(&self) -> DispatchSnapshot {
        DispatchSnapshot {
            available: self.available.clone(),
            active: self.active.clone(),
            history: self.history.clone(),
        }
    }

    /// Replace the board's state with a previously captured snapshot.
    pub fn restore(&mut self, snapshot: DispatchSnapshot) {
        self.available = snapshot.available;
        self.active = snapshot.active;
        self.history = snapshot.history;
    }

    fn locate(&self, id: OrderId) -> Option<(Bucket, usize)> {
        if let Some(i) = self.available.iter().position(|o| o.id == id) {
            return Some((Bucket::Available, i));
        }
        if let Some(i) = self.active.iter().position(|o| o.id == id) {
            return Some((Bucket::Active, i));
        }
        if let Some(i) = self.history.iter().position(|o| o.id == id) {
            return Some((Bucket::History, i));
        }
        None
    }
}
