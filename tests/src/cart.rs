use std::sync::Arc;

use storefront_common::cart::CartState;
use storefront_common::catalog::{Product, ProductId, Rating};
use storefront_common::money::Money;
use storefront_common::storage::{CART_KEY, KeyValueStore};
use storefront_core::cart::CartStore;
use storefront_core::catalog::CatalogService;
use storefront_core::http::HttpGateway;
use storefront_core::storage::FileStore;

use crate::utils::{Route, StubServer};

fn product(id: u64, amount: f64) -> Product {
    Product {
        id: ProductId(id),
        title: format!("Product {id}"),
        price: Money::from_amount(amount),
        description: String::new(),
        category: "electronics".to_string(),
        image: String::new(),
        rating: Rating::default(),
    }
}

fn lines(cart: &CartState) -> Vec<(u64, f64, u32)> {
    cart.items
        .iter()
        .map(|line| (line.id().0, line.price().as_amount(), line.quantity))
        .collect()
}

#[test]
fn cart_survives_restarts_between_commands() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut cart = CartStore::hydrate(FileStore::new(dir.path()));
        cart.add(product(1, 10.0)).unwrap();
        assert_eq!(lines(cart.state()), vec![(1, 10.0, 1)]);
        assert_eq!(cart.state().total.as_amount(), 10.0);
    }
    {
        let mut cart = CartStore::hydrate(FileStore::new(dir.path()));
        cart.add(product(1, 10.0)).unwrap();
        assert_eq!(lines(cart.state()), vec![(1, 10.0, 2)]);
        assert_eq!(cart.state().total.as_amount(), 20.0);
    }
    {
        let mut cart = CartStore::hydrate(FileStore::new(dir.path()));
        cart.set_quantity(ProductId(1), 5).unwrap();
        assert_eq!(cart.state().total.as_amount(), 50.0);
    }

    let mut cart = CartStore::hydrate(FileStore::new(dir.path()));
    assert_eq!(lines(cart.state()), vec![(1, 10.0, 5)]);
    cart.remove(ProductId(1)).unwrap();

    let restored = CartStore::hydrate(FileStore::new(dir.path()));
    assert!(restored.state().is_empty());
    assert_eq!(restored.state().total.as_amount(), 0.0);
}

#[test]
fn removing_a_line_from_a_saved_cart() {
    let dir = tempfile::tempdir().unwrap();
    let mut cart = CartStore::hydrate(FileStore::new(dir.path()));

    cart.add(product(2, 5.0)).unwrap();
    cart.add(product(3, 7.0)).unwrap();
    cart.remove(ProductId(2)).unwrap();

    let restored = CartStore::hydrate(FileStore::new(dir.path()));
    assert_eq!(lines(restored.state()), vec![(3, 7.0, 1)]);
    assert_eq!(restored.state().total.as_amount(), 7.0);
}

#[test]
fn saved_document_layout() {
    let dir = tempfile::tempdir().unwrap();
    let mut cart = CartStore::hydrate(FileStore::new(dir.path()));
    cart.add(product(4, 2.5)).unwrap();

    let raw = std::fs::read_to_string(dir.path().join("cart.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["total"], 2.5);
    assert_eq!(value["items"][0]["id"], 4);
    assert_eq!(value["items"][0]["title"], "Product 4");
    assert_eq!(value["items"][0]["quantity"], 1);
}

#[test]
fn corrupt_cart_file_starts_empty_and_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStore::new(dir.path());
    storage.set(CART_KEY, "{\"items\": 12").unwrap();

    let mut cart = CartStore::hydrate(&storage);
    assert!(cart.state().is_empty());

    cart.add(product(1, 1.0)).unwrap();
    let restored = CartStore::hydrate(&storage);
    assert_eq!(restored.state().total.as_amount(), 1.0);
}

#[test]
fn catalog_prices_leave_no_rounding_residue() {
    let dir = tempfile::tempdir().unwrap();
    let mut cart = CartStore::hydrate(FileStore::new(dir.path()));

    cart.add(product(1, 109.95)).unwrap();
    cart.add(product(2, 22.3)).unwrap();
    cart.add(product(3, 0.1)).unwrap();
    cart.remove(ProductId(1)).unwrap();

    let restored = CartStore::hydrate(FileStore::new(dir.path()));
    assert_eq!(restored.state().total, Money::from_cents(2240));
    assert_eq!(restored.state().total, restored.state().computed_total());

    let mut cart = restored;
    cart.clear().unwrap();
    let raw = std::fs::read_to_string(dir.path().join("cart.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["total"], 0.0);
}

#[tokio::test]
async fn adding_a_fetched_product() {
    let server = StubServer::start(vec![Route::new(
        "GET",
        "/products/9",
        200,
        r#"{"id":9,"title":"WD 2TB Elements Portable External Hard Drive","price":64,"description":"","category":"electronics","image":"","rating":{"rate":3.3,"count":203}}"#,
    )])
    .await;
    let service = CatalogService::new(Arc::new(HttpGateway::new(&server.base).unwrap()));
    let dir = tempfile::tempdir().unwrap();
    let mut cart = CartStore::hydrate(FileStore::new(dir.path()));

    let fetched = service.product(ProductId(9)).await.unwrap();
    cart.add(fetched.clone()).unwrap();
    cart.add(fetched).unwrap();

    assert_eq!(lines(cart.state()), vec![(9, 64.0, 2)]);
    assert_eq!(cart.state().total.as_amount(), 128.0);
    assert_eq!(cart.state().items[0].product.rating.count, 203);
}
