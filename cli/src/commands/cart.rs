use colored::*;
use storefront_common::cart::CartState;
use storefront_common::catalog::{Product, ProductId};
use storefront_common::config::Config;
use storefront_common::storage::KeyValueStore;
use storefront_core::cart::CartStore;
use storefront_core::catalog::CatalogService;
use tracing::{Instrument, info, warn};

use crate::sprint;
use crate::terminal::{colors, format, print, spinner};

pub fn show<S: KeyValueStore>(store: &CartStore<S>, cfg: &Config) -> anyhow::Result<()> {
    let cart: &CartState = store.state();

    if cart.is_empty() {
        print::header("your cart is empty", cfg.quiet);
        if cfg.quiet < 2 {
            print::print_status("Browse with `storefront products` and add items with `storefront cart add <id>`");
        }
        return Ok(());
    }

    print::header("Cart", cfg.quiet);
    for (idx, line) in cart.items.iter().enumerate() {
        match cfg.quiet {
            2 => print::print(&format!(
                "{:>4}  x{}  {}",
                line.id().to_string().color(colors::ACCENT),
                line.quantity,
                format::price(line.subtotal())
            )),
            _ => {
                print::tree_head(line.id(), &line.product.title);
                print::as_tree_one_level(format::cart_line_to_detail(line));
                if idx + 1 != cart.items.len() {
                    sprint!();
                }
            }
        }
    }

    print_total(cart, cfg);
    Ok(())
}

fn print_total(cart: &CartState, cfg: &Config) {
    let units: ColoredString = format!("{} item(s)", cart.unit_count()).bold().green();
    let output: String = format!("Total: {} for {}", format::price(cart.total), units);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => print::print(&output),
    }
}

pub async fn add<S: KeyValueStore>(
    store: &mut CartStore<S>,
    service: &CatalogService,
    id: ProductId,
    cfg: &Config,
) -> anyhow::Result<()> {
    let product: Product = service
        .product(id)
        .instrument(spinner::request_span("Looking up product..."))
        .await?;
    let title: String = product.title.clone();

    if !store.add(product)? {
        warn!("Product {id} is already at the largest quantity, nothing changed");
        return Ok(());
    }
    info!("Added to cart successfully: {}", title.bold());
    print_total(store.state(), cfg);
    Ok(())
}

pub fn remove<S: KeyValueStore>(store: &mut CartStore<S>, id: ProductId, cfg: &Config) -> anyhow::Result<()> {
    if store.remove(id)? {
        info!("Removed product {id} from the cart");
        print_total(store.state(), cfg);
    } else {
        warn!("Product {id} is not in the cart, nothing changed");
    }
    Ok(())
}

pub fn set<S: KeyValueStore>(
    store: &mut CartStore<S>,
    id: ProductId,
    quantity: i64,
    cfg: &Config,
) -> anyhow::Result<()> {
    if store.set_quantity(id, quantity)? {
        info!("Product {id} quantity set to {quantity}");
        print_total(store.state(), cfg);
        return Ok(());
    }

    if quantity < 1 {
        warn!("Quantity must be at least 1, use `storefront cart remove {id}` to drop the line");
    } else if u32::try_from(quantity).is_err() {
        warn!("Quantity {quantity} is too large, nothing changed");
    } else if store.state().line(id).is_none() {
        warn!("Product {id} is not in the cart, nothing changed");
    } else {
        warn!("Quantity of product {id} is already {quantity}");
    }
    Ok(())
}

pub fn clear<S: KeyValueStore>(store: &mut CartStore<S>, cfg: &Config) -> anyhow::Result<()> {
    if store.clear()? {
        info!("Cart cleared");
    } else if cfg.quiet < 2 {
        print::print_status("The cart was already empty");
    }
    Ok(())
}
