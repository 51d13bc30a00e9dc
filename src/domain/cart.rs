use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::{Product, ProductId};

/// One row of the shopping cart.
///
/// Shares its identifier with the product it refers to, so there is at most
/// one line per product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Units of the product in the cart.
    pub quantity: u32,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl CartLine {
    /// A line holding `quantity` units of `product`.
    pub fn for_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
            quantity,
            created_at: product.created_at.clone(),
            updated_at: product.updated_at.clone(),
        }
    }

    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// What the cart service hands back after moving one unit into the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartAddition {
    pub product: Product,
    pub item: CartLine,
}

/// Aggregate figures for rendering the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartSummary {
    pub lines: usize,
    pub units: u64,
    pub total: Decimal,
}

impl CartSummary {
    pub fn from_lines(lines: &[CartLine]) -> Self {
        lines.iter().fold(
            Self {
                lines: lines.len(),
                ..Self::default()
            },
            |mut summary, line| {
                summary.units += u64::from(line.quantity);
                summary.total += line.line_total();
                summary
            },
        )
    }

    pub fn is_empty(&self) -> bool {
        self.lines == 0
    }
}
