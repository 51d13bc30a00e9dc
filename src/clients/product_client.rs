use async_trait::async_trait;
use tracing::{debug, instrument};
use crate::actor_framework::ResourceClient;
use crate::domain::{NewProductRequest, Product};
use crate::gateway::{GatewayError, ProductService};
use crate::product_actor::{ProductAction, ProductActionResult};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, products);

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, request: NewProductRequest) -> Result<Product, GatewayError> {
        debug!("Sending request");
        self.inner.create(request).await.map_err(GatewayError::from)
    }

    /// Takes one unit of stock, returning the product as it is afterwards.
    #[instrument(skip(self))]
    pub async fn reserve_unit(&self, id: String) -> Result<Product, GatewayError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::ReserveUnit).await? {
            ProductActionResult::ReserveUnit(product) => Ok(product),
        }
    }
}

#[async_trait]
impl ProductService for ProductClient {
    async fn list_all(&self) -> Result<Vec<Product>, GatewayError> {
        self.list_products().await
    }

    async fn create(&self, request: NewProductRequest) -> Result<Product, GatewayError> {
        self.create_product(request).await
    }
}
