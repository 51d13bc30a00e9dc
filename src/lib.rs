//! # Storefront
//!
//! Keeps a product catalog and a shopping cart in step with the product and
//! cart services that own the real stock figures.
//!
//! ## Ingredients
//!
//! - **Domain types** - Products, cart lines and the raw add-product form → [`domain`]
//! - **Stores** - Ordered in-memory catalog and cart → [`store::CatalogStore`], [`store::CartStore`]
//! - **Reconciliation** - Moves a unit into the cart and applies the service's answer to both stores → [`Storefront`]
//! - **Gateways** - The service capabilities the storefront calls → [`gateway::ProductService`], [`gateway::CartService`]
//!     - over HTTP → [`gateway::HttpGateway`]
//!     - in-process, on top of a generic resource actor → [`StorefrontSystem`]
//! - **System concerns** - Configuration and tracing setup → [`StorefrontConfig`], [`setup_tracing`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! # async fn demo() -> Result<(), storefront::StorefrontError> {
//! use rust_decimal::Decimal;
//! use storefront::domain::Product;
//! use storefront::StorefrontSystem;
//!
//! let catalog = vec![Product::new("product_1", "Amazon Kindle E-reader", Decimal::new(7999, 2), 5)];
//! let system = StorefrontSystem::with_products(32, catalog);
//! let storefront = system.storefront();
//!
//! storefront.initialize().await?;
//! let addition = storefront.add_to_cart("product_1").await?;
//! println!("{} left, {} in cart", addition.product.quantity, addition.item.quantity);
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod cart_actor;
pub mod clients;
pub mod domain;
pub mod engine;
pub mod error;
pub mod gateway;
pub mod product_actor;
pub mod store;

#[cfg(test)]
mod mock_framework;

pub use app_system::{setup_tracing, StorefrontConfig, StorefrontSystem};
pub use engine::{InitialState, Storefront};
pub use error::StorefrontError;
