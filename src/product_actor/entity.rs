use chrono::{SecondsFormat, Utc};
use crate::actor_framework::Entity;
use crate::domain::{NewProductRequest, Product};
use super::actions::{ProductAction, ProductActionResult};

/// Timestamp in the form the product service hands out, e.g. `2020-10-04T05:57:02.777Z`.
pub(crate) fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl Entity for Product {
    type Id = String;
    type CreatePayload = NewProductRequest;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;

    fn id(&self) -> &String { &self.id }

    /// Creates a new Product from creation parameters.
    ///
    /// # Arguments
    /// * `id` - Unique identifier for the product
    /// * `payload` - Title, price and starting quantity
    ///
    /// # Errors
    /// Rejects payloads that would break the catalog's invariants.
    fn from_create(id: String, payload: NewProductRequest) -> Result<Self, String> {
        payload.validate()?;
        let quantity = u32::try_from(payload.quantity)
            .map_err(|_| format!("quantity out of range: {}", payload.quantity))?;
        Ok(Self::new(id, payload.title, payload.price, quantity))
    }

    fn on_create(&mut self) -> Result<(), String> {
        let now = timestamp();
        self.created_at = now.clone();
        self.updated_at = now;
        Ok(())
    }

    /// Handles product-specific actions.
    ///
    /// # Actions
    /// - `ReserveUnit`: Decrements stock by one and returns the updated product
    ///
    /// # Errors
    /// Returns an error if the product is out of stock.
    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, String> {
        match action {
            ProductAction::ReserveUnit => {
                if self.quantity == 0 {
                    return Err(format!("Product {} is out of stock", self.id));
                }
                self.quantity -= 1;
                self.updated_at = timestamp();
                Ok(ProductActionResult::ReserveUnit(self.clone()))
            }
        }
    }
}
