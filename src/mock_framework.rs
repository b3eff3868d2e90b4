//! # Mock Framework
//!
//! Utilities for testing clients and the order service in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_get`] or [`expect_get_many`] to assert behavior
//! and answer each request, and [`expect_no_request`] to assert that nothing else was sent.

use crate::actor_framework::{Entity, FrameworkError, Response, ResourceClient, ResourceRequest};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// We don't want to spin up a full `ResourceActor` when we are only testing the
/// logic that sits on top of a client (e.g. `CreateOrderService`).
///
/// Instead, we create a "Mock Client". This client sends messages to a channel we control (`receiver`).
/// We can then inspect the messages arriving on that channel and reply with whatever the
/// scenario needs (success, failure, missing rows) deterministically.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::CreateParams, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a GetMany request
pub async fn expect_get_many<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(Vec<T::Id>, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::GetMany { ids, respond_to }) => Some((ids, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an UpdateMany request
pub async fn expect_update_many<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Vec<(T::Id, T::UpdateParams)>, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::UpdateMany { updates, respond_to }) => Some((updates, respond_to)),
        _ => None,
    }
}

/// Asserts that no request is waiting on the channel.
///
/// Call this after the task under test has finished, so that anything it
/// sent is already queued.
pub fn expect_no_request<T: Entity + std::fmt::Debug>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) {
    match receiver.try_recv() {
        Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => {}
        Ok(request) => panic!("Unexpected request: {:?}", request),
    }
}

/// Replies to a pending request with a communication failure.
pub fn fail<R>(respond_to: Response<R>) {
    let _ = respond_to.send(Err(FrameworkError::ActorDropped));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::CustomerClient;
    use crate::domain::{Customer, CustomerCreate};

    #[tokio::test]
    async fn test_mock_client() {
        let (inner, mut receiver) = create_mock_client::<Customer>(10);
        let client = CustomerClient::new(inner);

        let create_task = tokio::spawn(async move {
            let params = CustomerCreate { name: "Test".to_string(), email: "test@example.com".to_string() };
            client.create_customer(params).await
        });

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(params.name, "Test");
        let customer = Customer::new("customer_1", params.name, params.email);
        responder.send(Ok(customer.clone())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(customer));
        expect_no_request(&mut receiver);
    }
}
