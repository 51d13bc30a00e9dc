use std::str::FromStr;

use rust_decimal::Decimal;

use super::product::NewProductRequest;

/// Raw text of the "add a product" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub title: String,
    pub price: String,
    pub quantity: String,
}

impl ProductForm {
    pub fn new(
        title: impl Into<String>,
        price: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            price: price.into(),
            quantity: quantity.into(),
        }
    }

    /// Coerces the text fields into a request.
    ///
    /// Only the shape is checked here; sign and emptiness of the title are
    /// left to the storefront.
    pub fn parse(&self) -> Result<NewProductRequest, String> {
        let price = self.price.trim();
        let price = Decimal::from_str(price)
            .map_err(|e| format!("price `{price}` is not a number: {e}"))?;

        let quantity = self.quantity.trim();
        let quantity = quantity
            .parse::<i64>()
            .map_err(|e| format!("quantity `{quantity}` is not a whole number: {e}"))?;

        Ok(NewProductRequest {
            title: self.title.trim().to_string(),
            price,
            quantity,
        })
    }

    /// Clears every field after a successful submission.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
