//! Shared fixtures for the Mercato integration tests.
//!
//! The tests under `tests/` drive the engines end to end: catalog -> cart ->
//! checkout -> order book -> dispatch board, plus snapshot persistence.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use mercato_core::{Category, CategoryId, DeliveryAddress, Money, Product, ProductId};
use mercato_orders::ProductCatalog;

static INIT: Once = Once::new();

/// Install a test-friendly tracing subscriber once per process.
///
/// Honors `RUST_LOG`; defaults to `info`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// A small fixed catalog shared by the integration tests.
#[must_use]
pub fn sample_catalog() -> ProductCatalog {
    let drinks = CategoryId::new(1);
    let food = CategoryId::new(2);
    ProductCatalog::new(
        vec![
            Product {
                id: ProductId::new(1),
                name: "Espresso".to_owned(),
                price: Money::from_cents(150),
                category: drinks,
            },
            Product {
                id: ProductId::new(2),
                name: "Cappuccino".to_owned(),
                price: Money::from_cents(250),
                category: drinks,
            },
            Product {
                id: ProductId::new(3),
                name: "Margherita".to_owned(),
                price: Money::from_cents(850),
                category: food,
            },
        ],
        vec![
            Category {
                id: drinks,
                name: "Drinks".to_owned(),
            },
            Category {
                id: food,
                name: "Food".to_owned(),
            },
        ],
    )
}

/// A fixed delivery address for checkout fixtures.
#[must_use]
pub fn sample_address() -> DeliveryAddress {
    DeliveryAddress::new("12 Via Roma", "Torino", "10121")
}
