//! # Cart Store
//!
//! Owns the [`CartState`] for the lifetime of the process and keeps the
//! persisted copy in step with it.
//!
//! The store applies a command to the in-memory state first, then, if the
//! command changed anything, writes the whole state back under
//! [`CART_KEY`]. The two steps stay separate so the state rules can be
//! exercised without any storage at all.

use storefront_common::cart::{CartCommand, CartState};
use storefront_common::catalog::{Product, ProductId};
use storefront_common::storage::{self, CART_KEY, KeyValueStore, Loaded, StorageError};
use tracing::{debug, warn};

pub struct CartStore<S: KeyValueStore> {
    state: CartState,
    storage: S,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Creates an empty cart without reading `storage`.
    pub fn new(storage: S) -> Self {
        Self {
            state: CartState::new(),
            storage,
        }
    }

    /// Creates a cart from whatever `storage` holds under [`CART_KEY`].
    ///
    /// Missing, unreadable or malformed data yields an empty cart. Hydrated
    /// data is taken as-is and not checked against the cart invariants.
    pub fn hydrate(storage: S) -> Self {
        let state = match storage::load_json::<_, CartState>(&storage, CART_KEY) {
            Ok(Loaded::Found(state)) => {
                debug!("Restored cart with {} line(s)", state.items.len());
                state
            }
            Ok(Loaded::Missing) => CartState::new(),
            Ok(Loaded::Malformed(err)) => {
                warn!("Ignoring malformed saved cart: {err}");
                CartState::new()
            }
            Err(err) => {
                warn!("Could not read saved cart: {err}");
                CartState::new()
            }
        };

        Self { state, storage }
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Applies `command` and persists the result when it changed the cart.
    ///
    /// Returns whether the cart changed. A failed write is returned as an
    /// error, but the change stays applied in memory.
    pub fn dispatch(&mut self, command: CartCommand) -> Result<bool, StorageError> {
        debug!("Applying cart command {:?}", command);
        if !self.state.apply(command) {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Writes the current state to storage.
    pub fn persist(&self) -> Result<(), StorageError> {
        storage::save_json(&self.storage, CART_KEY, &self.state)
    }

    pub fn add(&mut self, product: Product) -> Result<bool, StorageError> {
        self.dispatch(CartCommand::Add(product))
    }

    pub fn remove(&mut self, id: ProductId) -> Result<bool, StorageError> {
        self.dispatch(CartCommand::Remove(id))
    }

    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> Result<bool, StorageError> {
        self.dispatch(CartCommand::SetQuantity { id, quantity })
    }

    pub fn clear(&mut self) -> Result<bool, StorageError> {
        self.dispatch(CartCommand::Clear)
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
