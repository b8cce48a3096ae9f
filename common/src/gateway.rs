//! # Remote Service Ports
//!
//! Contracts for the remote catalog and account service. Every call is a
//! single request with no retry, caching or pagination.

use async_trait::async_trait;
use thiserror::Error;

use crate::account::{Credentials, ProfileUpdate, Registration, User};
use crate::catalog::{Product, ProductId};

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Transport failure, unexpected status or undecodable body.
    #[error("{context}: {reason}")]
    RequestFailed { context: String, reason: String },
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("no user named '{0}'")]
    UnknownUser(String),
}

impl GatewayError {
    pub fn request_failed(context: impl Into<String>, reason: impl ToString) -> Self {
        Self::RequestFailed {
            context: context.into(),
            reason: reason.to_string(),
        }
    }
}

/// Which products to list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub limit: Option<usize>,
}

/// Read access to the product catalog.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    async fn products(&self, query: &ProductQuery) -> Result<Vec<Product>, GatewayError>;

    async fn categories(&self) -> Result<Vec<String>, GatewayError>;

    async fn product(&self, id: ProductId) -> Result<Product, GatewayError>;
}

/// Authentication and user records.
#[async_trait]
pub trait AccountGateway: Send + Sync {
    /// Exchanges credentials for an opaque session token.
    async fn login(&self, credentials: &Credentials) -> Result<String, GatewayError>;

    async fn users(&self) -> Result<Vec<User>, GatewayError>;

    async fn user(&self, id: u64) -> Result<User, GatewayError>;

    async fn update_user(&self, id: u64, update: &ProfileUpdate) -> Result<User, GatewayError>;

    /// Registers a user and returns the id the service assigned.
    async fn create_user(&self, registration: &Registration) -> Result<u64, GatewayError>;
}
