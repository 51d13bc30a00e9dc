use crate::domain::Product;

/// Custom actions for Product entities.
///
/// These actions represent domain-specific operations that can be performed
/// on a product beyond creation and listing.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Takes one unit out of the available stock.
    ///
    /// # Errors
    /// Will fail if no stock is left.
    ReserveUnit,
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone)]
pub enum ProductActionResult {
    /// Result from ReserveUnit action - the product after the decrement
    ReserveUnit(Product),
}
