use std::time::{Duration, Instant};

use colored::*;
use storefront_common::catalog::{Product, ProductId};
use storefront_common::config::Config;
use storefront_core::catalog::{Browse, CatalogService};
use tracing::{Instrument, info};

use crate::sprint;
use crate::terminal::{colors, format, print, spinner};

pub async fn products(service: &CatalogService, browse: Browse, cfg: &Config) -> anyhow::Result<()> {
    let start_time: Instant = Instant::now();
    let products: Vec<Product> = service
        .browse(&browse)
        .instrument(spinner::request_span("Fetching products..."))
        .await?;

    if products.is_empty() {
        print::header("no matching products", cfg.quiet);
        print::no_results();
        return Ok(());
    }

    let title: String = match &browse.category {
        Some(category) => format::category_label(category),
        None => "Products".to_string(),
    };
    print::header(&title, cfg.quiet);
    print_products(&products, cfg);
    print_summary(products.len(), start_time.elapsed(), cfg);
    Ok(())
}

fn print_products(products: &[Product], cfg: &Config) {
    for (idx, product) in products.iter().enumerate() {
        match cfg.quiet {
            2 => print_product_line(product),
            _ => {
                print::tree_head(product.id, &product.title);
                print::as_tree_one_level(format::product_to_detail(product));
                if idx + 1 != products.len() {
                    sprint!();
                }
            }
        }
    }
}

fn print_product_line(product: &Product) {
    print::print(&format!(
        "{:>4}  {}  {}",
        product.id.to_string().color(colors::ACCENT),
        format::price(product.price),
        product.title
    ));
}

fn print_summary(count: usize, total_time: Duration, cfg: &Config) {
    let listed: ColoredString = format!("{count} products").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: &ColoredString =
        &format!("Catalog loaded: {listed} listed in {total_time}").color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(output);
        }
        1 => info!("{}", output),
        _ => {}
    }
}

pub async fn categories(service: &CatalogService, cfg: &Config) -> anyhow::Result<()> {
    let categories: Vec<String> = service
        .categories()
        .instrument(spinner::request_span("Fetching categories..."))
        .await?;

    if categories.is_empty() {
        print::header("no categories", cfg.quiet);
        print::no_results();
        return Ok(());
    }

    print::header("Categories", cfg.quiet);
    for category in &categories {
        match cfg.quiet {
            2 => print::print(category),
            _ => print::print_status(format!(
                "{} {}",
                format::category_label(category).color(colors::CATEGORY),
                format!("(--category \"{category}\")").color(colors::SEPARATOR)
            )),
        }
    }
    Ok(())
}

pub async fn product(service: &CatalogService, id: ProductId, cfg: &Config) -> anyhow::Result<()> {
    let product: Product = service
        .product(id)
        .instrument(spinner::request_span("Fetching product..."))
        .await?;

    print::header("Product", cfg.quiet);
    print::tree_head(product.id, &product.title);
    print::as_tree_one_level(format::product_to_detail(&product));

    if cfg.quiet < 2 && !product.description.is_empty() {
        sprint!();
        print::print(&product.description);
    }
    if cfg.quiet == 0 && !product.image.is_empty() {
        sprint!();
        print::aligned_line("Image", 5, product.image.as_str());
    }
    print::end_of_program(cfg.quiet);
    Ok(())
}
