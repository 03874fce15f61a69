//! Promo-code lookup policy.
//!
//! The promo table is injected, not baked into the engine: any type
//! implementing [`PromoLookup`] can back `apply_promo_code`. The bundled
//! [`StaticPromoTable`] is an in-memory map with a configurable artificial
//! latency, standing in for the remote validation service.

use std::collections::HashMap;
use std::time::Duration;

use mercato_core::Money;

/// Resolves a normalized promo code to a flat discount amount.
///
/// Codes passed to `lookup` are already trimmed and uppercased by the engine.
#[allow(async_fn_in_trait)]
pub trait PromoLookup {
    /// Returns the discount for `code`, or `None` if the code is unknown.
    async fn lookup(&self, code: &str) -> Option<Money>;
}

/// A fixed in-memory promo table.
#[derive(Debug, Clone, Default)]
pub struct StaticPromoTable {
    entries: HashMap<String, Money>,
    latency: Duration,
}

impl StaticPromoTable {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard promotion set.
    #[must_use]
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.insert("WELCOME10", Money::from_major(10));
        table.insert("SAVE5", Money::from_major(5));
        table.insert("FREESHIP", Money::from_major(5));
        table
    }

    /// Simulate a remote round-trip of `latency` per lookup.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Register a code. Keys are stored uppercased.
    pub fn insert(&mut self, code: &str, discount: Money) {
        self.entries.insert(code.trim().to_uppercase(), discount);
    }
}

impl PromoLookup for StaticPromoTable {
    async fn lookup(&self, code: &str) -> Option<Money> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.entries.get(code).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_standard_table_knows_welcome10() {
        let table = StaticPromoTable::standard();
        assert_eq!(table.lookup("WELCOME10").await, Some(Money::from_major(10)));
    }

    #[tokio::test]
    async fn test_unknown_code_is_none() {
        let table = StaticPromoTable::standard();
        assert_eq!(table.lookup("NOPE").await, None);
    }

    #[tokio::test]
    async fn test_insert_normalizes_key() {
        let mut table = StaticPromoTable::new();
        table.insert("  spring20 ", Money::from_major(20));
        assert_eq!(table.lookup("SPRING20").await, Some(Money::from_major(20)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_simulated() {
        let table = StaticPromoTable::standard().with_latency(Duration::from_millis(150));
        let start = tokio::time::Instant::now();
        let _ = table.lookup("WELCOME10").await;
        assert!(start.elapsed() >= Duration::from_millis(150));
    }
}
