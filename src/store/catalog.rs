use std::collections::HashMap;

use thiserror::Error;

use crate::domain::{Product, ProductId};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Product already in catalog: {0}")]
    DuplicateIdentifier(ProductId),
    #[error("Product not found: {0}")]
    NotFound(ProductId),
    #[error("Product {found} cannot replace {expected}")]
    IdentifierMismatch { expected: ProductId, found: ProductId },
}

/// Products in display order, indexed by id.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole catalog.
    pub fn load(&mut self, products: Vec<Product>) {
        self.index = products
            .iter()
            .enumerate()
            .map(|(position, product)| (product.id.clone(), position))
            .collect();
        self.products = products;
    }

    /// Appends a newly created product.
    pub fn insert(&mut self, product: Product) -> Result<(), CatalogError> {
        if self.index.contains_key(&product.id) {
            return Err(CatalogError::DuplicateIdentifier(product.id));
        }
        self.index.insert(product.id.clone(), self.products.len());
        self.products.push(product);
        Ok(())
    }

    /// Overwrites the stored product for `id` with the service's post-mutation copy.
    pub fn replace_quantity(&mut self, id: &str, product: Product) -> Result<(), CatalogError> {
        if product.id != id {
            return Err(CatalogError::IdentifierMismatch {
                expected: id.to_string(),
                found: product.id,
            });
        }
        let slot = self
            .index
            .get(id)
            .and_then(|&position| self.products.get_mut(position))
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        *slot = product;
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.index.get(id).and_then(|&position| self.products.get(position))
    }

    pub fn snapshot(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
