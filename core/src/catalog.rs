//! # Catalog Service
//!
//! Browsing use cases over a [`CatalogGateway`]: listing products (whole
//! catalog or one category), narrowing them by a title search, listing
//! categories and looking up a single product.

use std::sync::Arc;

use storefront_common::catalog::{Product, ProductId};
use storefront_common::gateway::{CatalogGateway, GatewayError, ProductQuery};
use tracing::debug;

/// What the user asked to browse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Browse {
    pub category: Option<String>,
    /// Forwarded to the service, so it caps the result before searching.
    pub limit: Option<usize>,
    pub search: Option<String>,
}

pub struct CatalogService {
    gateway: Arc<dyn CatalogGateway>,
}

impl CatalogService {
    pub fn new(gateway: Arc<dyn CatalogGateway>) -> Self {
        Self { gateway }
    }

    /// Fetches the requested listing and applies the title search locally.
    pub async fn browse(&self, browse: &Browse) -> Result<Vec<Product>, GatewayError> {
        let query = ProductQuery {
            category: browse.category.clone(),
            limit: browse.limit,
        };
        let products = self.gateway.products(&query).await?;
        debug!("Catalog returned {} product(s)", products.len());

        Ok(match normalized_search(browse.search.as_deref()) {
            Some(needle) => filter_by_title(products, &needle),
            None => products,
        })
    }

    pub async fn categories(&self) -> Result<Vec<String>, GatewayError> {
        self.gateway.categories().await
    }

    pub async fn product(&self, id: ProductId) -> Result<Product, GatewayError> {
        self.gateway.product(id).await
    }
}

fn normalized_search(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

/// Keeps products whose title contains `needle`, ignoring case.
pub fn filter_by_title(products: Vec<Product>, needle: &str) -> Vec<Product> {
    let needle = needle.to_lowercase();
    products
        .into_iter()
        .filter(|product| product.title_contains(&needle))
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
