//! # HTTP Gateway
//!
//! Implements [`CatalogGateway`] and [`AccountGateway`] against the remote
//! REST service with `reqwest`. Each operation is exactly one request; a
//! failure of any kind is reported once and never retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use storefront_common::account::{Credentials, ProfileUpdate, Registration, User};
use storefront_common::catalog::{Product, ProductId};
use storefront_common::gateway::{AccountGateway, CatalogGateway, GatewayError, ProductQuery};
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

#[derive(Deserialize)]
struct CreatedResponse {
    id: u64,
}

pub struct HttpGateway {
    client: Client,
    base: Url,
}

impl HttpGateway {
    pub fn new(base: &str) -> Result<Self, GatewayError> {
        let base = Url::parse(base)
            .map_err(|err| GatewayError::request_failed(format!("invalid base URL '{base}'"), err))?;
        if base.cannot_be_a_base() {
            return Err(GatewayError::request_failed(
                "invalid base URL",
                format!("'{base}' cannot hold a path"),
            ));
        }

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("storefront/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| GatewayError::request_failed("failed to build HTTP client", err))?;

        Ok(Self { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Joins `segments` onto the base URL, percent-encoding each one.
    fn url<I>(&self, segments: I) -> Url
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
        context: &str,
    ) -> Result<Response, GatewayError> {
        debug!("{} {}", method, url);
        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        request
            .send()
            .await
            .map_err(|err| GatewayError::request_failed(context, err))
    }

    async fn fetch<T, B>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
        context: &str,
    ) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(method, url, body, context).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::request_failed(
                context,
                format!("server answered {status}"),
            ));
        }

        response
            .json::<T>()
            .await
            .map_err(|err| GatewayError::request_failed(context, err))
    }

    async fn get<T: DeserializeOwned>(&self, url: Url, context: &str) -> Result<T, GatewayError> {
        self.fetch::<T, ()>(Method::GET, url, None, context).await
    }
}

#[async_trait]
impl CatalogGateway for HttpGateway {
    async fn products(&self, query: &ProductQuery) -> Result<Vec<Product>, GatewayError> {
        let mut url = match &query.category {
            Some(category) => self.url(["products", "category", category.as_str()]),
            None => self.url(["products"]),
        };
        if let Some(limit) = query.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }

        self.get(url, "failed to fetch products").await
    }

    async fn categories(&self) -> Result<Vec<String>, GatewayError> {
        self.get(self.url(["products", "categories"]), "failed to fetch categories")
            .await
    }

    async fn product(&self, id: ProductId) -> Result<Product, GatewayError> {
        let context = format!("failed to fetch product {id}");
        self.get(self.url(["products".to_string(), id.to_string()]), &context)
            .await
    }
}

#[async_trait]
impl AccountGateway for HttpGateway {
    async fn login(&self, credentials: &Credentials) -> Result<String, GatewayError> {
        let response = self
            .send(
                Method::POST,
                self.url(["auth", "login"]),
                Some(credentials),
                "login request failed",
            )
            .await?;

        if !response.status().is_success() {
            debug!("Login rejected with {}", response.status());
            return Err(GatewayError::InvalidCredentials);
        }

        let TokenResponse { token } = response
            .json()
            .await
            .map_err(|err| GatewayError::request_failed("login request failed", err))?;
        Ok(token)
    }

    async fn users(&self) -> Result<Vec<User>, GatewayError> {
        self.get(self.url(["users"]), "failed to fetch users").await
    }

    async fn user(&self, id: u64) -> Result<User, GatewayError> {
        let context = format!("failed to fetch user {id}");
        self.get(self.url(["users".to_string(), id.to_string()]), &context)
            .await
    }

    async fn update_user(&self, id: u64, update: &ProfileUpdate) -> Result<User, GatewayError> {
        let url = self.url(["users".to_string(), id.to_string()]);
        self.fetch(Method::PUT, url, Some(update), "failed to update profile")
            .await
    }

    async fn create_user(&self, registration: &Registration) -> Result<u64, GatewayError> {
        let created: CreatedResponse = self
            .fetch(
                Method::POST,
                self.url(["users"]),
                Some(registration),
                "registration failed",
            )
            .await?;
        Ok(created.id)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
