//! Reconciliation of the catalog and the cart.
//!
//! Every quantity the stores hold comes from a product or cart service
//! response. Nothing is decremented or incremented locally, so several
//! in-flight requests for the same product cannot stack up stale arithmetic.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{error, info, instrument, warn};

use crate::domain::{CartAddition, CartLine, CartSummary, NewProductRequest, Product, ProductForm};
use crate::error::StorefrontError;
use crate::gateway::{CartService, ProductService};
use crate::store::{CartStore, CatalogStore};

/// What `initialize` loaded into the stores.
#[derive(Debug, Clone, PartialEq)]
pub struct InitialState {
    pub products: Vec<Product>,
    pub cart_lines: Vec<CartLine>,
}

#[derive(Debug, Default)]
struct StorefrontState {
    catalog: CatalogStore,
    cart: CartStore,
}

impl StorefrontState {
    /// Applies both halves of a confirmed cart addition, or neither.
    fn apply_addition(&mut self, id: &str, addition: CartAddition) -> Result<(), StorefrontError> {
        if addition.item.id != id {
            return Err(StorefrontError::StateDesync(format!(
                "cart line {} returned for product {}",
                addition.item.id, id
            )));
        }
        if addition.item.quantity == 0 {
            return Err(StorefrontError::StateDesync(format!(
                "empty cart line returned for product {}",
                id
            )));
        }
        self.catalog.replace_quantity(id, addition.product)?;
        self.cart.upsert(id, addition.item);
        Ok(())
    }
}

/// The storefront core: owns the catalog and cart stores and keeps them in
/// step with the product and cart services.
///
/// Methods take `&self`, so the presentation layer may dispatch a new intent
/// while an earlier one is still waiting on a service.
pub struct Storefront {
    products: Arc<dyn ProductService>,
    cart: Arc<dyn CartService>,
    state: Mutex<StorefrontState>,
}

impl Storefront {
    pub fn new(products: Arc<dyn ProductService>, cart: Arc<dyn CartService>) -> Self {
        Self {
            products,
            cart,
            state: Mutex::new(StorefrontState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StorefrontState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Loads both stores from the services.
    ///
    /// Both lists are fetched before either store is touched; an empty cart
    /// is a successful, empty load.
    #[instrument(skip(self))]
    pub async fn initialize(&self) -> Result<InitialState, StorefrontError> {
        let (products, cart_lines) = tokio::join!(self.products.list_all(), self.cart.list());
        let products = products.map_err(|e| {
            error!(error = %e, "Fetching products failed");
            e
        })?;
        let cart_lines = cart_lines.map_err(|e| {
            error!(error = %e, "Fetching cart failed");
            e
        })?;

        let mut state = self.lock();
        state.catalog.load(products.clone());
        state.cart.load(cart_lines.clone());
        info!(products = products.len(), cart_lines = cart_lines.len(), "Storefront initialized");

        Ok(InitialState { products, cart_lines })
    }

    /// Creates a product through the product service and appends it to the catalog.
    #[instrument(skip(self), fields(title = %request.title))]
    pub async fn add_product(&self, request: NewProductRequest) -> Result<Product, StorefrontError> {
        if let Err(reason) = request.validate() {
            warn!(%reason, "Rejected new product");
            return Err(StorefrontError::InvalidRequest(reason));
        }

        let product = self.products.create(request).await.map_err(|e| {
            error!(error = %e, "Product creation failed");
            e
        })?;

        self.lock().catalog.insert(product.clone()).map_err(|e| {
            error!(error = %e, "Created product could not be added to the catalog");
            StorefrontError::from(e)
        })?;
        info!(product_id = %product.id, "Product added to catalog");

        Ok(product)
    }

    /// Parses the raw form fields and adds the resulting product.
    #[instrument(skip(self, form))]
    pub async fn submit_product_form(&self, form: &ProductForm) -> Result<Product, StorefrontError> {
        let request = form.parse().map_err(|reason| {
            warn!(%reason, "Rejected product form");
            StorefrontError::InvalidRequest(reason)
        })?;
        self.add_product(request).await
    }

    /// Moves one unit of a product into the cart.
    ///
    /// The request is only sent if the catalog shows stock. Both stores are
    /// updated from the cart service's answer together, or not at all.
    #[instrument(skip(self))]
    pub async fn add_to_cart(&self, product_id: &str) -> Result<CartAddition, StorefrontError> {
        {
            let state = self.lock();
            let product = state.catalog.get(product_id).ok_or_else(|| {
                warn!("Product not in catalog");
                StorefrontError::NotFound(product_id.to_string())
            })?;
            if !product.is_available() {
                warn!("Product out of stock");
                return Err(StorefrontError::OutOfStock { id: product_id.to_string() });
            }
        }

        let addition = self.cart.add_one(product_id.to_string()).await.map_err(|e| {
            error!(error = %e, "Adding to cart failed");
            e
        })?;

        self.lock().apply_addition(product_id, addition.clone()).map_err(|e| {
            error!(error = %e, "Cart addition could not be reconciled");
            e
        })?;
        info!(
            product_quantity = addition.product.quantity,
            cart_quantity = addition.item.quantity,
            "Added to cart"
        );

        Ok(addition)
    }

    pub fn catalog_snapshot(&self) -> Vec<Product> {
        self.lock().catalog.snapshot().to_vec()
    }

    pub fn cart_snapshot(&self) -> Vec<CartLine> {
        self.lock().cart.snapshot().to_vec()
    }

    pub fn cart_summary(&self) -> CartSummary {
        self.lock().cart.summary()
    }

    pub fn product(&self, product_id: &str) -> Option<Product> {
        self.lock().catalog.get(product_id).cloned()
    }
}
