//! # Cart State
//!
//! The cart is an ordered list of lines, unique by product id, and a running
//! total. The total is maintained incrementally: every transition adjusts it
//! by exactly the amount its own line mutation adds or removes, so that
//! `total == Σ price * quantity` holds after every command. Amounts are
//! [`Money`], so the sum is exact.
//!
//! This module is pure state. Persisting the state after a change is the job
//! of the store that owns it.

use serde::{Deserialize, Serialize};

use crate::catalog::{Product, ProductId};
use crate::money::Money;

/// A product in the cart together with how many of it were added.
///
/// Serialized as the product's own fields next to `quantity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn price(&self) -> Money {
        self.product.price
    }

    pub fn subtotal(&self) -> Money {
        self.product.price.times(self.quantity)
    }
}

/// A request to change the cart.
#[derive(Debug, Clone, PartialEq)]
pub enum CartCommand {
    Add(Product),
    Remove(ProductId),
    /// Targets below one are ignored rather than treated as a removal.
    SetQuantity { id: ProductId, quantity: i64 },
    Clear,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartState {
    pub items: Vec<CartLine>,
    pub total: Money,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a command and reports whether the state changed.
    pub fn apply(&mut self, command: CartCommand) -> bool {
        match command {
            CartCommand::Add(product) => self.add(product),
            CartCommand::Remove(id) => self.remove(id),
            CartCommand::SetQuantity { id, quantity } => self.set_quantity(id, quantity),
            CartCommand::Clear => self.clear(),
        }
    }

    /// Adds one unit of `product`, creating its line if needed.
    ///
    /// An existing line keeps the price it was created with, and the total
    /// grows by that same price. A line already at `u32::MAX` is left as is
    /// and `false` is returned.
    pub fn add(&mut self, product: Product) -> bool {
        match self.line_mut(product.id) {
            Some(line) => {
                let Some(quantity) = line.quantity.checked_add(1) else {
                    return false;
                };
                line.quantity = quantity;
                let price = line.price();
                self.total += price;
            }
            None => {
                self.total += product.price;
                self.items.push(CartLine {
                    product,
                    quantity: 1,
                });
            }
        }
        true
    }

    pub fn remove(&mut self, id: ProductId) -> bool {
        let Some(index) = self.items.iter().position(|line| line.id() == id) else {
            return false;
        };

        let line = self.items.remove(index);
        self.total -= line.subtotal();
        true
    }

    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        if quantity < 1 {
            return false;
        }
        let Ok(quantity) = u32::try_from(quantity) else {
            return false;
        };
        let Some(line) = self.line_mut(id) else {
            return false;
        };
        if line.quantity == quantity {
            return false;
        }

        let before = line.subtotal();
        line.quantity = quantity;
        let after = line.subtotal();
        self.total += after - before;
        true
    }

    pub fn clear(&mut self) -> bool {
        if self.items.is_empty() && self.total.is_zero() {
            return false;
        }
        self.items.clear();
        self.total = Money::ZERO;
        true
    }

    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.items.iter().find(|line| line.id() == id)
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.items.iter_mut().find(|line| line.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of units across all lines.
    pub fn unit_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// The total recomputed from the lines, for checking the running total.
    pub fn computed_total(&self) -> Money {
        self.items.iter().map(CartLine::subtotal).sum()
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
