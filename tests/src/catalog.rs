use std::sync::Arc;

use storefront_common::catalog::ProductId;
use storefront_common::gateway::GatewayError;
use storefront_core::catalog::{Browse, CatalogService};
use storefront_core::http::HttpGateway;

use crate::utils::{PRODUCTS, Route, StubServer};

async fn service(routes: Vec<Route>) -> (CatalogService, StubServer) {
    let server = StubServer::start(routes).await;
    let gateway = HttpGateway::new(&server.base).unwrap();
    (CatalogService::new(Arc::new(gateway)), server)
}

#[tokio::test]
async fn lists_whole_catalog() {
    let (service, server) = service(vec![Route::new("GET", "/products", 200, PRODUCTS)]).await;

    let products = service.browse(&Browse::default()).await.unwrap();

    assert_eq!(products.len(), 3);
    assert_eq!(products[1].id, ProductId(5));
    assert_eq!(products[1].price.cents(), 69500);
    assert_eq!(server.requests()[0].target, "/products");
}

#[tokio::test]
async fn category_and_limit_shape_the_request() {
    let (service, server) = service(vec![Route::new(
        "GET",
        "/products/category/men's%20clothing?limit=1",
        200,
        r#"[{"id":1,"title":"Fjallraven Backpack","price":109.95,"description":"","category":"men's clothing","image":"","rating":{"rate":3.9,"count":120}}]"#,
    )])
    .await;

    let browse = Browse {
        category: Some("men's clothing".to_string()),
        limit: Some(1),
        search: None,
    };
    let products = service.browse(&browse).await.unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(
        server.requests()[0].target,
        "/products/category/men's%20clothing?limit=1"
    );
}

#[tokio::test]
async fn search_is_applied_after_fetching() {
    let (service, _server) = service(vec![Route::new("GET", "/products", 200, PRODUCTS)]).await;

    let browse = Browse {
        search: Some("hard DRIVE".to_string()),
        ..Browse::default()
    };
    let products = service.browse(&browse).await.unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, ProductId(9));
}

#[tokio::test]
async fn lists_categories() {
    let (service, _server) = service(vec![Route::new(
        "GET",
        "/products/categories",
        200,
        r#"["electronics","jewelery","men's clothing","women's clothing"]"#,
    )])
    .await;

    let categories = service.categories().await.unwrap();

    assert_eq!(categories.len(), 4);
    assert_eq!(categories[2], "men's clothing");
}

#[tokio::test]
async fn failed_request_is_reported_not_retried() {
    let (service, server) = service(vec![Route::new(
        "GET",
        "/products/3",
        500,
        r#"{"error":"boom"}"#,
    )])
    .await;

    let result = service.product(ProductId(3)).await;

    assert!(matches!(result, Err(GatewayError::RequestFailed { .. })));
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn undecodable_body_is_a_request_failure() {
    let (service, _server) =
        service(vec![Route::new("GET", "/products/4", 200, "<html>oops</html>")]).await;

    let result = service.product(ProductId(4)).await;

    assert!(matches!(result, Err(GatewayError::RequestFailed { .. })));
}
