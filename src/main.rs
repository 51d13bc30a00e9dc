use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{error, info, Instrument};

use storefront::app_system::GatewayKind;
use storefront::domain::{Product, ProductForm};
use storefront::gateway::HttpGateway;
use storefront::{setup_tracing, Storefront, StorefrontConfig, StorefrontSystem};

/// Catalog the in-process service starts with.
fn demo_catalog() -> Vec<Product> {
    vec![
        Product::new("product_1", "Amazon Kindle E-reader", Decimal::new(7999, 2), 5),
        Product::new("product_2", "Apple 10.5-Inch iPad Pro", Decimal::new(64999, 2), 0),
        Product::new("product_3", "Yamaha Portable Keyboard", Decimal::new(15599, 2), 2),
        Product::new("product_4", "Tinker, Tailor, Soldier, Spy - A John le Carre Novel", Decimal::new(1374, 2), 12),
    ]
}

async fn run(storefront: &Storefront) -> Result<(), String> {
    let span = tracing::info_span!("initialize");
    let initial = storefront.initialize().instrument(span).await.map_err(|e| e.to_string())?;
    info!(products = initial.products.len(), cart_lines = initial.cart_lines.len(), "Storefront loaded");

    let span = tracing::info_span!("add_product");
    let product = async {
        info!("Submitting product form");
        storefront.submit_product_form(&ProductForm::new("Wheel", "10", "2")).await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;
    info!(product_id = %product.id, "Product created successfully");

    // Two clicks on the same product, then one on something nobody can buy.
    let span = tracing::info_span!("shopping");
    async {
        for id in [product.id.as_str(), product.id.as_str(), "product_2"] {
            match storefront.add_to_cart(id).await {
                Ok(addition) => info!(
                    product_id = %id,
                    left = addition.product.quantity,
                    in_cart = addition.item.quantity,
                    "Added to cart"
                ),
                Err(e) => error!(product_id = %id, error = %e, "Add to cart failed"),
            }
        }
    }
    .instrument(span)
    .await;

    for product in storefront.catalog_snapshot() {
        info!(product_id = %product.id, title = %product.title, quantity = product.quantity, "Catalog");
    }
    let summary = storefront.cart_summary();
    if summary.is_empty() {
        info!("Your cart is empty");
    } else {
        for line in storefront.cart_snapshot() {
            info!(product_id = %line.id, title = %line.title, quantity = line.quantity, "Cart");
        }
        info!(lines = summary.lines, units = summary.units, total = %summary.total, "Cart total");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = StorefrontConfig::from_env().map_err(|e| e.to_string())?;
    setup_tracing(&config.logging);

    info!(gateway = ?config.gateway.kind, "Starting storefront");

    match config.gateway.kind {
        GatewayKind::Memory => {
            let system = StorefrontSystem::with_products(config.gateway.channel_buffer, demo_catalog());
            let storefront = system.storefront();
            let result = run(&storefront).await;

            // The storefront holds client clones; release them before shutdown.
            drop(storefront);
            system.shutdown().await?;
            result?;
        }
        GatewayKind::Http => {
            let gateway = Arc::new(HttpGateway::new(config.gateway.api_url));
            let storefront = Storefront::new(gateway.clone(), gateway);
            run(&storefront).await?;
        }
    }

    info!("Storefront demo completed successfully");
    Ok(())
}
