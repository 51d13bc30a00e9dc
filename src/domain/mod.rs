pub mod product;
pub mod cart;
pub mod form;

pub use product::*;
pub use cart::*;
pub use form::*;
