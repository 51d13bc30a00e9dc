//! Product-specific backend logic, including stock reservation.

mod actions;
pub mod entity;

pub use actions::*;
