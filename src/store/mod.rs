//! In-memory views of the catalog and the cart, mutated only from
//! service-confirmed data.

pub mod catalog;
pub mod cart;

pub use catalog::*;
pub use cart::*;
