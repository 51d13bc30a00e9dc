use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

use super::{CartService, GatewayError, ProductService};
use crate::domain::{CartAddition, CartLine, NewProductRequest, Product, ProductId};

/// Talks to the REST product/cart backend.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddToCartBody {
    product_id: ProductId,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        decode(response).await
    }

    async fn post<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, GatewayError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(GatewayError::Status {
            status: status.as_u16(),
            body,
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| GatewayError::Decode(e.to_string()))
}

#[async_trait]
impl ProductService for HttpGateway {
    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<Product>, GatewayError> {
        debug!("Sending request");
        self.get("/api/products").await
    }

    #[instrument(skip(self))]
    async fn create(&self, request: NewProductRequest) -> Result<Product, GatewayError> {
        debug!("Sending request");
        self.post("/api/products", &request).await
    }
}

#[async_trait]
impl CartService for HttpGateway {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<CartLine>, GatewayError> {
        debug!("Sending request");
        self.get("/api/cart").await
    }

    #[instrument(skip(self))]
    async fn add_one(&self, product_id: ProductId) -> Result<CartAddition, GatewayError> {
        debug!("Sending request");
        self.post("/api/add-to-cart", &AddToCartBody { product_id }).await
    }
}
