//! Snapshot persistence across simulated restarts.

#![allow(clippy::unwrap_used)]

use mercato_cart::{CartEngine, CartSnapshot, PricingConfig, StaticPromoTable};
use mercato_core::{Money, PaymentMethod, ProductId};
use mercato_integration_tests::{init_tracing, sample_address, sample_catalog};
use mercato_orders::{
    DeliveryOrder, DispatchBoard, DispatchSnapshot, GeoPoint, OrderBook, OrderBookSnapshot,
};
use mercato_persistence::{JsonFileStore, SnapshotStore};

#[tokio::test]
async fn test_cart_survives_a_restart() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let catalog = sample_catalog();
    let promos = StaticPromoTable::standard();

    let mut cart = CartEngine::new(PricingConfig::default());
    let espresso = catalog.fetch_by_id(ProductId::new(1)).unwrap();
    cart.add_item(espresso, 3, Vec::new()).unwrap();
    assert!(cart.apply_promo_code("SAVE5", &promos).await);
    store.save("cart", &cart.snapshot()).unwrap();

    // Restart: a fresh engine restored from disk reconciles to the same state.
    let mut revived = CartEngine::new(PricingConfig::default());
    revived.restore(store.load::<CartSnapshot>("cart").unwrap());

    assert_eq!(revived.item_count(), 1);
    assert_eq!(revived.promo_code(), Some("SAVE5"));
    assert_eq!(revived.totals(), cart.totals());
}

#[test]
fn test_order_book_keeps_its_id_counter() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let catalog = sample_catalog();

    let mut cart = CartEngine::new(PricingConfig::default());
    let espresso = catalog.fetch_by_id(ProductId::new(1)).unwrap();
    cart.add_item(espresso, 1, Vec::new()).unwrap();
    let snapshot = cart.checkout();

    let mut book = OrderBook::new();
    let first = book
        .create_order(&snapshot, sample_address(), PaymentMethod::Card)
        .unwrap();
    let second = book
        .create_order(&snapshot, sample_address(), PaymentMethod::Card)
        .unwrap();
    store.save("orders", &book.snapshot()).unwrap();

    let mut revived = OrderBook::new();
    revived.restore(store.load::<OrderBookSnapshot>("orders").unwrap());
    let third = revived
        .create_order(&snapshot, sample_address(), PaymentMethod::Card)
        .unwrap();

    // Ids keep increasing after a restart; no reuse.
    assert!(second.id > first.id);
    assert!(third.id > second.id);
    assert_eq!(revived.fetch_all().len(), 3);
}

#[test]
fn test_dispatch_board_survives_a_restart() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let catalog = sample_catalog();

    let mut cart = CartEngine::new(PricingConfig::default());
    let margherita = catalog.fetch_by_id(ProductId::new(3)).unwrap();
    cart.add_item(margherita, 1, Vec::new()).unwrap();
    let mut book = OrderBook::new();
    let order = book
        .create_order(&cart.checkout(), sample_address(), PaymentMethod::Cash)
        .unwrap();

    let mut board = DispatchBoard::new();
    board.offer(DeliveryOrder::from_order(
        &order,
        GeoPoint::new(45.0703, 7.6869),
        GeoPoint::new(45.0625, 7.6782),
        1.4,
        Money::from_cents(350),
    ));
    board.accept_order(order.id).unwrap();
    store.save("dispatch", &board.snapshot()).unwrap();

    let mut revived = DispatchBoard::new();
    revived.restore(store.load::<DispatchSnapshot>("dispatch").unwrap());
    assert!(revived.available().is_empty());
    assert_eq!(revived.active().len(), 1);
    assert_eq!(revived.snapshot(), board.snapshot());
}

#[test]
fn test_missing_snapshots_mean_fresh_engines() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    assert!(store.load::<CartSnapshot>("cart").is_none());
    assert!(store.load::<OrderBookSnapshot>("orders").is_none());
    assert!(store.load::<DispatchSnapshot>("dispatch").is_none());
}
