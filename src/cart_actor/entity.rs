use crate::actor_framework::Entity;
use crate::domain::{CartLine, Product};
use crate::product_actor::entity::timestamp;

/// Payload for putting one unit of a product into the cart.
#[derive(Debug, Clone)]
pub struct CartLineCreate {
    pub product: Product,
}

impl Entity for CartLine {
    type Id = String;
    type CreatePayload = CartLineCreate;
    type Action = (); // No custom actions for now
    type ActionResult = ();

    fn id(&self) -> &String { &self.id }

    /// Opens a line for the product holding a single unit.
    fn from_create(id: String, payload: CartLineCreate) -> Result<Self, String> {
        if id != payload.product.id {
            return Err(format!("Cart line {} cannot hold product {}", id, payload.product.id));
        }
        Ok(CartLine::for_product(&payload.product, 1))
    }

    fn on_create(&mut self) -> Result<(), String> {
        let now = timestamp();
        self.created_at = now.clone();
        self.updated_at = now;
        Ok(())
    }

    /// Adds one more unit and refreshes the display data from the product.
    fn on_upsert(&mut self, payload: CartLineCreate) -> Result<(), String> {
        self.title = payload.product.title;
        self.price = payload.product.price;
        self.quantity += 1;
        self.updated_at = timestamp();
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
