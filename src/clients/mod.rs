//! Typed clients over the in-memory product and cart actors.
//!
//! These are the in-process stand-in for the remote product/cart service and
//! implement the gateway capabilities directly.

#[macro_use]
mod macros;
pub mod product_client;
pub mod cart_client;

pub use product_client::ProductClient;
pub use cart_client::CartClient;

use crate::actor_framework::FrameworkError;
use crate::gateway::GatewayError;

impl From<FrameworkError> for GatewayError {
    fn from(error: FrameworkError) -> Self {
        match error {
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
                GatewayError::Communication(error.to_string())
            }
            FrameworkError::NotFound(_) | FrameworkError::Entity(_) => {
                GatewayError::Rejected(error.to_string())
            }
        }
    }
}
