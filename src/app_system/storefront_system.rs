use tracing::{info, error};
use crate::clients::{CartClient, ProductClient};
use crate::actor_framework::ResourceActor;
use crate::domain::{CartLine, Product};
use crate::engine::Storefront;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// The in-process product and cart service.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct StorefrontSystem {
    pub product_client: ProductClient,
    pub cart_client: CartClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Starts the system with a pre-existing catalog.
    pub fn with_products(buffer_size: usize, products: Vec<Product>) -> Self {
        // 1. Setup Product Service
        let product_id_counter = Arc::new(AtomicU64::new(products.len() as u64 + 1));
        let next_product_id = move || {
            let id = product_id_counter.fetch_add(1, Ordering::SeqCst);
            format!("product_{}", id)
        };

        let (product_actor, product_resource_client) = ResourceActor::<Product>::new(buffer_size, next_product_id);
        let product_actor = product_actor.with_items(products);
        let product_client = ProductClient::new(product_resource_client);
        let product_handle = tokio::spawn(product_actor.run());

        // 2. Setup Cart Service (lines are keyed by product id, never generated)
        let (cart_actor, cart_resource_client) = ResourceActor::<CartLine>::new(buffer_size, String::new);
        let cart_client = CartClient::new(cart_resource_client, product_client.clone());
        let cart_handle = tokio::spawn(cart_actor.run());

        info!("Storefront services started");

        Self {
            product_client,
            cart_client,
            handles: vec![product_handle, cart_handle],
        }
    }

    /// A storefront backed by this system's clients.
    pub fn storefront(&self) -> Storefront {
        Storefront::new(
            Arc::new(self.product_client.clone()),
            Arc::new(self.cart_client.clone()),
        )
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        // Dropping every client closes the channels, which ends each actor's run loop.
        // Storefronts built from this system hold clones and must be dropped first.
        drop(self.cart_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
