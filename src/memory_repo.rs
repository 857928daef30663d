//! In-memory idea store.
//!
//! Same contract as the SQLite backend, without durability. Useful for tests
//! and for embedding the store where no database file is wanted.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::StorageError;
use crate::models::Idea;
use crate::repository::IdeaStore;

#[derive(Default)]
struct Inner {
    next_id: i64,
    ideas: BTreeMap<i64, Idea>,
}

/// Process-local [`IdeaStore`] backed by a `BTreeMap` behind an async lock.
#[derive(Default)]
pub struct InMemoryIdeaStore {
    inner: RwLock<Inner>,
}

impl InMemoryIdeaStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdeaStore for InMemoryIdeaStore {
    async fn save(&self, idea: &Idea) -> Result<Idea, StorageError> {
        let mut inner = self.inner.write().await;

        let id = match idea.id {
            None => {
                inner.next_id += 1;
                inner.next_id
            }
            Some(id) => {
                // Keep fresh ids ahead of any caller-supplied id.
                inner.next_id = inner.next_id.max(id);
                id
            }
        };

        let saved = Idea {
            id: Some(id),
            title: idea.title.clone(),
            description: idea.description.clone(),
        };
        inner.ideas.insert(id, saved.clone());

        debug!("Saved idea: id={}", id);
        Ok(saved)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Idea>, StorageError> {
        let inner = self.inner.read().await;
        Ok(inner.ideas.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Idea>, StorageError> {
        let inner = self.inner.read().await;
        Ok(inner.ideas.values().cloned().collect())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, StorageError> {
        let inner = self.inner.read().await;
        Ok(inner.ideas.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StorageError> {
        let mut inner = self.inner.write().await;
        inner.ideas.remove(&id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), StorageError> {
        let mut inner = self.inner.write().await;
        inner.ideas.clear();
        Ok(())
    }

    async fn count(&self) -> Result<i64, StorageError> {
        let inner = self.inner.read().await;
        Ok(inner.ideas.len() as i64)
    }
}
