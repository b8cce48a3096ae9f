use colored::*;
use storefront_common::account::User;
use storefront_common::cart::CartLine;
use storefront_common::catalog::{Product, Rating};
use storefront_common::money::Money;

use crate::terminal::colors;

type Detail = (String, ColoredString);

pub fn price(amount: Money) -> ColoredString {
    amount.to_string().color(colors::PRICE).bold()
}

/// Capitalizes the first letter, as categories are listed in lower case.
pub fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn rating(rating: &Rating) -> ColoredString {
    format!("{:.1} ({} reviews)", rating.rate, rating.count).color(colors::RATING)
}

pub fn product_to_detail(product: &Product) -> Vec<Detail> {
    vec![
        ("Price".to_string(), price(product.price)),
        (
            "Category".to_string(),
            category_label(&product.category).color(colors::CATEGORY),
        ),
        ("Rating".to_string(), rating(&product.rating)),
    ]
}

pub fn cart_line_to_detail(line: &CartLine) -> Vec<Detail> {
    vec![
        ("Price".to_string(), price(line.price())),
        ("Qty".to_string(), line.quantity.to_string().bold()),
        ("Subtotal".to_string(), price(line.subtotal())),
    ]
}

pub fn user_to_detail(user: &User) -> Vec<Detail> {
    let address = &user.address;
    let mut details: Vec<Detail> = vec![
        ("Username".to_string(), user.username.normal()),
        ("Email".to_string(), user.email.normal()),
    ];

    if !user.phone.is_empty() {
        details.push(("Phone".to_string(), user.phone.normal()));
    }

    if !address.street.is_empty() || !address.city.is_empty() {
        details.push((
            "Address".to_string(),
            format!(
                "{} {}, {} {}",
                address.street, address.number, address.city, address.zipcode
            )
            .trim()
            .normal(),
        ));
    }

    details
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
