//! The data service contract.
//!
//! The board never talks HTTP itself. It goes through a [`DataService`],
//! which is the source of truth for one collection of items.

use std::sync::Arc;

use async_trait::async_trait;
use labboard_protocol::{BoardItem, ItemId, Researcher};

use crate::error::Result;

/// A remote collection of board items.
///
/// Each call is a single attempt: implementations do not retry.
#[async_trait]
pub trait DataService<T: BoardItem>: Send + Sync {
    /// Fetches the full collection.
    async fn list(&self) -> Result<Vec<T>>;

    /// Creates an item and returns the stored record, with its new id.
    async fn create(&self, draft: &T::Draft) -> Result<T>;

    /// Replaces the fields of the item with the same id and returns the
    /// stored record.
    async fn update(&self, item: &T) -> Result<T>;

    /// Deletes the item with the given id.
    async fn delete(&self, id: ItemId) -> Result<()>;
}

#[async_trait]
impl<T, S> DataService<T> for Arc<S>
where
    T: BoardItem,
    S: DataService<T> + ?Sized,
{
    async fn list(&self) -> Result<Vec<T>> {
        (**self).list().await
    }

    async fn create(&self, draft: &T::Draft) -> Result<T> {
        (**self).create(draft).await
    }

    async fn update(&self, item: &T) -> Result<T> {
        (**self).update(item).await
    }

    async fn delete(&self, id: ItemId) -> Result<()> {
        (**self).delete(id).await
    }
}

#[async_trait]
impl<T, S> DataService<T> for Box<S>
where
    T: BoardItem,
    S: DataService<T> + ?Sized,
{
    async fn list(&self) -> Result<Vec<T>> {
        (**self).list().await
    }

    async fn create(&self, draft: &T::Draft) -> Result<T> {
        (**self).create(draft).await
    }

    async fn update(&self, item: &T) -> Result<T> {
        (**self).update(item).await
    }

    async fn delete(&self, id: ItemId) -> Result<()> {
        (**self).delete(id).await
    }
}

/// A read-only source of researchers.
#[async_trait]
pub trait ResearcherDirectory: Send + Sync {
    /// Lists all researchers.
    async fn researchers(&self) -> Result<Vec<Researcher>>;
}

/// A fixed researcher list, used by the demo mode.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    researchers: Vec<Researcher>,
}

impl StaticDirectory {
    #[must_use]
    pub fn new(researchers: Vec<Researcher>) -> Self {
        Self { researchers }
    }
}

#[async_trait]
impl ResearcherDirectory for StaticDirectory {
    async fn researchers(&self) -> Result<Vec<Researcher>> {
        Ok(self.researchers.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_directory_returns_its_list() {
        let directory = StaticDirectory::new(vec![Researcher::new(1, "Jane Smith")]);
        let researchers = directory.researchers().await.unwrap();
        assert_eq!(researchers, vec![Researcher::new(1, "Jane Smith")]);
    }
}
