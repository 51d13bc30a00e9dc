//! # Mock Framework
//!
//! Utilities for testing clients and the storefront in isolation.
//!
//! Use [`create_mock_client`] to get a resource client and a receiver, or
//! [`create_mock_gateway`] to get a product/cart gateway and a receiver.
//! Then use helpers like [`expect_upsert`] or [`expect_add_one`] to assert behavior.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use crate::domain::{CartAddition, CartLine, NewProductRequest, Product, ProductId};
use crate::gateway::{CartService, GatewayError, ProductService};

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// In unit tests, we don't want to spin up a full `ResourceActor` if we are just
/// testing the *Client* logic (e.g., `CartClient`).
///
/// Instead, we create a "Mock Client". This client sends messages to a channel we control (`receiver`).
/// We can then inspect the messages arriving on that channel and assert they are correct.
/// This allows us to simulate the Actor's behavior (success, failure, delays) deterministically.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create_resource<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::CreatePayload, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list_resource<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<oneshot::Sender<Result<Vec<T>, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Upsert request
pub async fn expect_upsert<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, T::CreatePayload, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Upsert { id, payload, respond_to }) => Some((id, payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, T::Action, oneshot::Sender<Result<T::ActionResult, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

// =============================================================================
// Mock gateway
// =============================================================================

pub type Responder<T> = oneshot::Sender<Result<T, GatewayError>>;
pub type GatewayReceiver = mpsc::Receiver<GatewayCall>;

/// One call made against the mock gateway, waiting for the test to answer it.
#[derive(Debug)]
pub enum GatewayCall {
    ListAll { respond_to: Responder<Vec<Product>> },
    Create { request: NewProductRequest, respond_to: Responder<Product> },
    List { respond_to: Responder<Vec<CartLine>> },
    AddOne { product_id: ProductId, respond_to: Responder<CartAddition> },
}

/// Product and cart service whose calls are forwarded to the test.
///
/// A call stays suspended until the test sends on its responder, which makes
/// it possible to interleave several in-flight requests on purpose.
#[derive(Debug, Clone)]
pub struct MockGateway {
    sender: mpsc::Sender<GatewayCall>,
}

pub fn create_mock_gateway(buffer_size: usize) -> (Arc<MockGateway>, GatewayReceiver) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (Arc::new(MockGateway { sender }), receiver)
}

impl MockGateway {
    async fn call<T>(&self, make: impl FnOnce(Responder<T>) -> GatewayCall) -> Result<T, GatewayError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(make(respond_to)).await
            .map_err(|_| GatewayError::Communication("Mock closed".to_string()))?;
        response.await.map_err(|_| GatewayError::Communication("Mock dropped".to_string()))?
    }
}

#[async_trait]
impl ProductService for MockGateway {
    async fn list_all(&self) -> Result<Vec<Product>, GatewayError> {
        self.call(|respond_to| GatewayCall::ListAll { respond_to }).await
    }

    async fn create(&self, request: NewProductRequest) -> Result<Product, GatewayError> {
        self.call(|respond_to| GatewayCall::Create { request, respond_to }).await
    }
}

#[async_trait]
impl CartService for MockGateway {
    async fn list(&self) -> Result<Vec<CartLine>, GatewayError> {
        self.call(|respond_to| GatewayCall::List { respond_to }).await
    }

    async fn add_one(&self, product_id: ProductId) -> Result<CartAddition, GatewayError> {
        self.call(|respond_to| GatewayCall::AddOne { product_id, respond_to }).await
    }
}

/// Helper to verify that the next gateway call lists the products
pub async fn expect_list_all(receiver: &mut GatewayReceiver) -> Option<Responder<Vec<Product>>> {
    match receiver.recv().await {
        Some(GatewayCall::ListAll { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next gateway call creates a product
pub async fn expect_create(receiver: &mut GatewayReceiver) -> Option<(NewProductRequest, Responder<Product>)> {
    match receiver.recv().await {
        Some(GatewayCall::Create { request, respond_to }) => Some((request, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next gateway call lists the cart
pub async fn expect_list(receiver: &mut GatewayReceiver) -> Option<Responder<Vec<CartLine>>> {
    match receiver.recv().await {
        Some(GatewayCall::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next gateway call adds a unit to the cart
pub async fn expect_add_one(receiver: &mut GatewayReceiver) -> Option<(ProductId, Responder<CartAddition>)> {
    match receiver.recv().await {
        Some(GatewayCall::AddOne { product_id, respond_to }) => Some((product_id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Product>(10);

        let create_task = tokio::spawn(async move {
            let request = NewProductRequest::new("Wheel", Decimal::from(10), 2);
            client.create(request).await
        });

        let (payload, responder) = expect_create_resource(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.title, "Wheel");
        let created = Product::new("product_1", "Wheel", Decimal::from(10), 2);
        responder.send(Ok(created.clone())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(created));
    }

    #[tokio::test]
    async fn test_mock_gateway_reports_dropped_responder() {
        let (gateway, mut receiver) = create_mock_gateway(10);

        let list_task = tokio::spawn(async move { gateway.list().await });

        let responder = expect_list(&mut receiver).await.expect("Expected List call");
        drop(responder);

        let result = list_task.await.unwrap();
        assert_eq!(result, Err(GatewayError::Communication("Mock dropped".to_string())));
    }
}
