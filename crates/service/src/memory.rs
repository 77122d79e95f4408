//! An in-memory [`DataService`].
//!
//! Used by the demo mode and by tests. It behaves like a well-behaved REST
//! service: ids are assigned on create, versions are bumped on update and
//! stale versions are refused. Failures can be injected and every call is
//! recorded.

use std::collections::VecDeque;

use async_trait::async_trait;
use labboard_protocol::{BoardItem, ItemId};
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::{Result, ServiceError};
use crate::service::DataService;

/// A call received by an [`InMemoryService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    List,
    Create,
    Update(ItemId),
    Delete(ItemId),
}

#[derive(Debug)]
struct State<T> {
    items: Vec<T>,
    next_id: ItemId,
    failures: VecDeque<ServiceError>,
    calls: Vec<Call>,
}

/// A [`DataService`] holding its items in memory.
///
/// # Examples
///
/// ```
/// use labboard_protocol::{BoardItem, NewProject, Project};
/// use labboard_service::{DataService, InMemoryService};
///
/// # #[tokio::main]
/// # async fn main() {
/// let service = InMemoryService::new(vec![Project::new(1, "Soil survey", "todo")]);
/// let created = service.create(&NewProject::new("Reef study", "todo")).await.unwrap();
/// assert_eq!(created.id(), 2);
/// assert_eq!(service.list().await.unwrap().len(), 2);
/// # }
/// ```
#[derive(Debug)]
pub struct InMemoryService<T> {
    state: Mutex<State<T>>,
}

impl<T: BoardItem> InMemoryService<T> {
    /// Creates a service holding `items`.
    ///
    /// New ids continue after the largest existing id.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        let next_id = items.iter().map(BoardItem::id).max().unwrap_or(0) + 1;
        Self {
            state: Mutex::new(State {
                items,
                next_id,
                failures: VecDeque::new(),
                calls: Vec::new(),
            }),
        }
    }

    /// Makes the next call fail with `error`.
    ///
    /// Injected failures are consumed in order, one per call.
    pub async fn fail_next(&self, error: ServiceError) {
        self.state.lock().await.failures.push_back(error);
    }

    /// Returns a snapshot of the stored items.
    pub async fn items(&self) -> Vec<T> {
        self.state.lock().await.items.clone()
    }

    /// Returns every call received so far, in order.
    pub async fn calls(&self) -> Vec<Call> {
        self.state.lock().await.calls.clone()
    }

    /// Changes an item behind the client's back, as another client would.
    ///
    /// Returns `false` if there is no such item.
    pub async fn modify<F>(&self, id: ItemId, change: F) -> bool
    where
        F: FnOnce(&mut T) + Send,
    {
        let mut state = self.state.lock().await;
        match state.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                change(item);
                item.set_version(Some(item.version().map_or(1, |v| v + 1)));
                true
            }
            None => false,
        }
    }
}

impl<T> State<T> {
    fn begin(&mut self, call: Call) -> Result<()> {
        self.calls.push(call);
        match self.failures.pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl<T: BoardItem> DataService<T> for InMemoryService<T> {
    async fn list(&self) -> Result<Vec<T>> {
        let mut state = self.state.lock().await;
        state.begin(Call::List)?;
        Ok(state.items.clone())
    }

    async fn create(&self, draft: &T::Draft) -> Result<T> {
        let mut state = self.state.lock().await;
        state.begin(Call::Create)?;

        let id = state.next_id;
        state.next_id += 1;
        let mut item = T::from_draft(id, draft.clone());
        item.set_version(Some(1));
        state.items.push(item.clone());
        debug!(kind = %T::KIND, id, "stored new item");
        Ok(item)
    }

    async fn update(&self, item: &T) -> Result<T> {
        let id = item.id();
        let mut state = self.state.lock().await;
        state.begin(Call::Update(id))?;

        let stored = state
            .items
            .iter_mut()
            .find(|stored| stored.id() == id)
            .ok_or(ServiceError::NotFound { id: Some(id) })?;

        if let (Some(expected), Some(current)) = (item.version(), stored.version()) {
            if expected != current {
                return Err(ServiceError::Conflict { id });
            }
        }

        let next_version = stored.version().map(|v| v + 1);
        let mut updated = item.clone();
        updated.set_version(next_version);
        *stored = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: ItemId) -> Result<()> {
        let mut state = self.state.lock().await;
        state.begin(Call::Delete(id))?;

        let before = state.items.len();
        state.items.retain(|item| item.id() != id);
        if state.items.len() == before {
            return Err(ServiceError::NotFound { id: Some(id) });
        }
        Ok(())
    }
}
