//! Ideas store: persistence and repository abstractions for Idea records.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – Idea
//! - [`repository`] – IdeaStore trait
//! - [`idea_repo`] – SqliteIdeaStore (SQLite)
//! - [`memory_repo`] – InMemoryIdeaStore
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod idea_repo;
mod memory_repo;
mod models;
mod repository;
mod sqlite_pool;


pub use error::StorageError;
pub use idea_repo::SqliteIdeaStore;
pub use memory_repo::InMemoryIdeaStore;
pub use models::Idea;
pub use repository::IdeaStore;
pub use sqlite_pool::SqlitePoolManager;
