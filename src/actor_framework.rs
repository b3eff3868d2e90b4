use std::collections::HashMap;
use std::hash::Hash;
use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// 1. THE ABSTRACTION (Entity trait with lifecycle hooks)
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;
    type UpdateParams: Send + Sync + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and creation parameters
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String>;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), String> { Ok(()) }
    fn on_update(&mut self, update: Self::UpdateParams) -> Result<(), String>;
}

/// Errors surfaced by the generic actor/client pair.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Rejected: {0}")]
    Rejected(String),
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Batch lookup. Replies with the subset of `ids` that exist, in request order.
    GetMany {
        ids: Vec<T::Id>,
        respond_to: Response<Vec<T>>,
    },
    /// Batch update. Every id must exist, otherwise nothing is applied.
    UpdateMany {
        updates: Vec<(T::Id, T::UpdateParams)>,
        respond_to: Response<Vec<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    pub async fn run(mut self) {
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.handle_create(params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::GetMany { ids, respond_to } => {
                    let items = ids.iter().filter_map(|id| self.store.get(id).cloned()).collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::UpdateMany { updates, respond_to } => {
                    let _ = respond_to.send(self.handle_update_many(updates));
                }
                ResourceRequest::List { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
            }
        }
    }

    fn handle_create(&mut self, params: T::CreateParams) -> Result<T, FrameworkError> {
        let id = (self.next_id_fn)();
        let mut item = T::from_create_params(id.clone(), params).map_err(FrameworkError::Rejected)?;
        item.on_create().map_err(FrameworkError::Rejected)?;
        self.store.insert(id, item.clone());
        Ok(item)
    }

    fn handle_update_many(&mut self, updates: Vec<(T::Id, T::UpdateParams)>) -> Result<Vec<T>, FrameworkError> {
        if let Some((missing, _)) = updates.iter().find(|(id, _)| !self.store.contains_key(id)) {
            return Err(FrameworkError::NotFound(missing.to_string()));
        }

        // Stage on copies so a rejected hook leaves the store untouched.
        let mut staged: Vec<T> = Vec::with_capacity(updates.len());
        for (id, update) in updates {
            let mut item = match staged.iter().position(|item| item.id() == &id) {
                Some(pos) => staged.remove(pos),
                None => self.store.get(&id).cloned().ok_or_else(|| FrameworkError::NotFound(id.to_string()))?,
            };
            item.on_update(update).map_err(FrameworkError::Rejected)?;
            staged.push(item);
        }

        for item in &staged {
            self.store.insert(item.id().clone(), item.clone());
        }
        Ok(staged)
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(build(respond_to))
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn get_many(&self, ids: Vec<T::Id>) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::GetMany { ids, respond_to }).await
    }

    pub async fn update_many(&self, updates: Vec<(T::Id, T::UpdateParams)>) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::UpdateMany { updates, respond_to }).await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        id: String,
        value: u32,
    }

    #[derive(Debug)]
    struct CounterCreate {
        value: u32,
    }

    #[derive(Debug)]
    struct CounterUpdate {
        value: u32,
    }

    impl Entity for Counter {
        type Id = String;
        type CreateParams = CounterCreate;
        type UpdateParams = CounterUpdate;

        fn id(&self) -> &String { &self.id }

        fn from_create_params(id: String, params: CounterCreate) -> Result<Self, String> {
            Ok(Self { id, value: params.value })
        }

        fn on_create(&mut self) -> Result<(), String> {
            if self.value > 100 {
                return Err("value too large".to_string());
            }
            Ok(())
        }

        fn on_update(&mut self, update: CounterUpdate) -> Result<(), String> {
            if update.value > 100 {
                return Err("value too large".to_string());
            }
            self.value = update.value;
            Ok(())
        }
    }

    fn start() -> ResourceClient<Counter> {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || {
            let id = counter.fetch_add(1, Ordering::SeqCst);
            format!("counter_{}", id)
        };
        let (actor, client) = ResourceActor::new(10, next_id);
        tokio::spawn(actor.run());
        client
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let client = start();

        let created = client.create(CounterCreate { value: 3 }).await.unwrap();
        assert_eq!(created.id, "counter_1");

        let fetched = client.get(created.id.clone()).await.unwrap();
        assert_eq!(fetched, Some(created));
        assert_eq!(client.get("missing".to_string()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_hook_rejection_stores_nothing() {
        let client = start();

        let err = client.create(CounterCreate { value: 500 }).await.unwrap_err();
        assert_eq!(err, FrameworkError::Rejected("value too large".to_string()));
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_many_returns_existing_subset_in_request_order() {
        let client = start();
        let a = client.create(CounterCreate { value: 1 }).await.unwrap();
        let b = client.create(CounterCreate { value: 2 }).await.unwrap();

        let found = client
            .get_many(vec![b.id.clone(), "missing".to_string(), a.id.clone()])
            .await
            .unwrap();
        assert_eq!(found, vec![b, a]);
    }

    #[tokio::test]
    async fn test_update_many_is_all_or_nothing() {
        let client = start();
        let a = client.create(CounterCreate { value: 1 }).await.unwrap();
        let b = client.create(CounterCreate { value: 2 }).await.unwrap();

        let err = client
            .update_many(vec![
                (a.id.clone(), CounterUpdate { value: 10 }),
                ("missing".to_string(), CounterUpdate { value: 20 }),
            ])
            .await
            .unwrap_err();
        assert_eq!(err, FrameworkError::NotFound("missing".to_string()));

        let err = client
            .update_many(vec![
                (a.id.clone(), CounterUpdate { value: 10 }),
                (b.id.clone(), CounterUpdate { value: 900 }),
            ])
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::Rejected(_)));
        assert_eq!(client.get(a.id.clone()).await.unwrap().unwrap().value, 1);

        let updated = client
            .update_many(vec![
                (a.id.clone(), CounterUpdate { value: 10 }),
                (b.id.clone(), CounterUpdate { value: 20 }),
            ])
            .await
            .unwrap();
        assert_eq!(updated.len(), 2);
        assert_eq!(client.get(b.id).await.unwrap().unwrap().value, 20);
    }

    #[tokio::test]
    async fn test_client_reports_closed_actor() {
        let (actor, client) = ResourceActor::<Counter>::new(1, || "counter".to_string());
        drop(actor);

        let err = client.list().await.unwrap_err();
        assert_eq!(err, FrameworkError::ActorClosed);
    }
}
