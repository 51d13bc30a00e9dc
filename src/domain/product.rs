use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Opaque product identifier, assigned by the product service.
pub type ProductId = String;

/// Represents a product in the catalog.
///
/// Identity and timestamps come from the product service; the core never
/// generates or interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Units available for purchase.
    pub quantity: u32,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: Decimal,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            quantity,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    /// Whether at least one unit can still be moved into the cart.
    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }
}

/// Payload for creating a new product.
///
/// Carries raw user input, so the numbers are signed and unvalidated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProductRequest {
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: i64,
}

impl NewProductRequest {
    pub fn new(title: impl Into<String>, price: Decimal, quantity: i64) -> Self {
        Self {
            title: title.into(),
            price,
            quantity,
        }
    }

    /// Describes why this request cannot be sent, if it cannot.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title must not be empty".to_string());
        }
        if self.price < Decimal::ZERO {
            return Err(format!("price must not be negative, got {}", self.price));
        }
        if self.quantity < 0 {
            return Err(format!("quantity must not be negative, got {}", self.quantity));
        }
        Ok(())
    }
}
