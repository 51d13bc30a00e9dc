use thiserror::Error;

use crate::domain::ProductId;
use crate::gateway::GatewayError;
use crate::store::CatalogError;

/// Errors surfaced by the storefront to the presentation layer.
///
/// `InvalidRequest` and `OutOfStock` are raised before any service is
/// contacted. `NotFound` and `StateDesync` mean local and remote state have
/// drifted apart; the stores are left as they were.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorefrontError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Product out of stock: {id}")]
    OutOfStock { id: ProductId },
    #[error("Product not found: {0}")]
    NotFound(ProductId),
    #[error("Local state out of sync with service: {0}")]
    StateDesync(String),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl From<CatalogError> for StorefrontError {
    fn from(error: CatalogError) -> Self {
        StorefrontError::StateDesync(error.to_string())
    }
}
