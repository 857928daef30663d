//! Store contract for Idea records.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::Idea;

/// CRUD contract over [`Idea`] records keyed by their numeric id.
///
/// Every operation is a single atomic request/response; the trait retains no
/// cross-call state. Absent records are `None`/empty results, not errors —
/// [`StorageError`] only signals that the backing medium failed.
#[async_trait]
pub trait IdeaStore: Send + Sync {
    /// Inserts when `idea.id` is `None` (assigning a fresh id) or overwrites
    /// the record at `idea.id` otherwise. Returns the persisted
    /// representation.
    async fn save(&self, idea: &Idea) -> Result<Idea, StorageError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Idea>, StorageError>;

    /// Returns every stored record. Ordering is unspecified.
    async fn find_all(&self) -> Result<Vec<Idea>, StorageError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, StorageError>;

    /// Idempotent; deleting a non-existent id succeeds.
    async fn delete_by_id(&self, id: i64) -> Result<(), StorageError>;

    async fn delete_all(&self) -> Result<(), StorageError>;

    async fn count(&self) -> Result<i64, StorageError>;
}
