use async_trait::async_trait;
use tracing::{error, info, instrument};
use crate::actor_framework::ResourceClient;
use crate::cart_actor::CartLineCreate;
use crate::clients::ProductClient;
use crate::domain::{CartAddition, CartLine, ProductId};
use crate::gateway::{CartService, GatewayError};

/// Client for interacting with the Cart actor.
///
/// Adding to the cart orchestrates two actors: a unit is reserved from the
/// product first, then the cart line for that product is opened or grown.
/// The two steps are not atomic: a unit reserved for a cart update that then
/// fails stays out of stock.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<CartLine>,
    product_client: ProductClient,
}

impl CartClient {
    pub fn new(inner: ResourceClient<CartLine>, product_client: ProductClient) -> Self {
        Self {
            inner,
            product_client,
        }
    }

    #[instrument(skip(self))]
    pub async fn add_unit(&self, product_id: ProductId) -> Result<CartAddition, GatewayError> {
        info!("Processing add_to_cart request (Client Side)");

        // Step 1: Reserve stock
        let product = self.product_client.reserve_unit(product_id.clone()).await.map_err(|e| {
            error!(error = %e, "Stock reservation failed");
            e
        })?;

        // Step 2: Open or grow the cart line
        let item = self
            .inner
            .upsert(product_id.clone(), CartLineCreate { product: product.clone() })
            .await
            .map_err(|e| {
                error!(
                    error = %e,
                    product_id = %product_id,
                    left = product.quantity,
                    "Cart update failed, reserved unit not returned to stock"
                );
                GatewayError::from(e)
            })?;

        info!(product_quantity = product.quantity, cart_quantity = item.quantity, "Unit moved to cart");
        Ok(CartAddition { product, item })
    }
}

impl_client_methods!(CartClient, CartLine, cart_lines);

#[async_trait]
impl CartService for CartClient {
    async fn list(&self) -> Result<Vec<CartLine>, GatewayError> {
        self.list_cart_lines().await
    }

    async fn add_one(&self, product_id: ProductId) -> Result<CartAddition, GatewayError> {
        self.add_unit(product_id).await
    }
}
