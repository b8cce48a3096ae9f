//! # Storefront Core
//!
//! Use cases and adapters behind the storefront client.
//!
//! * **[`cart`]**: the persisted cart store.
//! * **[`session`]**: login, logout and profile management.
//! * **[`catalog`]**: browsing the remote catalog.
//! * **[`http`]**, **[`storage`]**: adapters implementing the ports from
//!   `storefront-common`.

pub mod cart;
pub mod catalog;
pub mod http;
pub mod session;
pub mod storage;
