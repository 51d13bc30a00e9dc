//! Cart-specific backend logic: one line per product, grown a unit at a time.

pub mod entity;

pub use entity::CartLineCreate;
