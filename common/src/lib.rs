//! # Storefront Common
//!
//! Models and ports shared by the storefront crates.
//!
//! * **[`catalog`]**, **[`account`]**: data as the remote service describes it.
//! * **[`cart`]**: the cart state and its transition rules.
//! * **[`money`]**: exact amounts in cents.
//! * **[`storage`]**, **[`gateway`]**: traits the core crate implements
//!   against the file system and the network.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod gateway;
pub mod money;
pub mod storage;
