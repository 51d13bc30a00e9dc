//! Capabilities the storefront calls out to for authoritative product and cart state.
//!
//! The storefront never computes quantities itself; whatever these services
//! return is the truth it reconciles its local stores against.

pub mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{CartAddition, CartLine, NewProductRequest, Product, ProductId};

pub use http::HttpGateway;

/// Errors raised by a product or cart service call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GatewayError {
    #[error("Service communication error: {0}")]
    Communication(String),
    #[error("Request rejected by service: {0}")]
    Rejected(String),
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Service responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Could not decode service response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait ProductService: Send + Sync {
    /// The full catalog, in the service's order.
    async fn list_all(&self) -> Result<Vec<Product>, GatewayError>;

    /// Creates a product; the service assigns its id and timestamps.
    async fn create(&self, request: NewProductRequest) -> Result<Product, GatewayError>;
}

#[async_trait]
pub trait CartService: Send + Sync {
    /// Every line currently in the cart. An empty cart is an empty vector.
    async fn list(&self) -> Result<Vec<CartLine>, GatewayError>;

    /// Moves one unit of a product into the cart.
    async fn add_one(&self, product_id: ProductId) -> Result<CartAddition, GatewayError>;
}
