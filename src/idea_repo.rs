//! SQLite-backed idea store.
//!
//! Uses SqlitePoolManager and the Idea model. External: SQLite via sqlx;
//! callers construct one with a database URL and use it through the
//! [`IdeaStore`] trait.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::StorageError;
use crate::models::Idea;
use crate::repository::IdeaStore;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct SqliteIdeaStore {
    pool_manager: SqlitePoolManager,
}

impl SqliteIdeaStore {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let store = Self { pool_manager };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating ideas table if not exists");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS ideas (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT NOT NULL
            )
            "#,
        )
        .execute(self.pool_manager.pool())
        .await?;

        Ok(())
    }
}

#[async_trait]
impl IdeaStore for SqliteIdeaStore {
    async fn save(&self, idea: &Idea) -> Result<Idea, StorageError> {
        let pool = self.pool_manager.pool();

        let id = match idea.id {
            None => {
                let result = sqlx::query("INSERT INTO ideas (title, description) VALUES (?, ?)")
                    .bind(&idea.title)
                    .bind(&idea.description)
                    .execute(pool)
                    .await?;

                result.last_insert_rowid()
            }
            Some(id) => {
                sqlx::query(
                    r#"
                    INSERT INTO ideas (id, title, description) VALUES (?, ?, ?)
                    ON CONFLICT(id) DO UPDATE SET
                        title = excluded.title,
                        description = excluded.description
                    "#,
                )
                .bind(id)
                .bind(&idea.title)
                .bind(&idea.description)
                .execute(pool)
                .await?;

                id
            }
        };

        info!("Saved idea: id={}, title={}", id, idea.title);

        Ok(Idea {
            id: Some(id),
            title: idea.title.clone(),
            description: idea.description.clone(),
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Idea>, StorageError> {
        let idea = sqlx::query_as::<_, Idea>("SELECT * FROM ideas WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool_manager.pool())
            .await?;

        Ok(idea)
    }

    async fn find_all(&self) -> Result<Vec<Idea>, StorageError> {
        let ideas: Vec<Idea> = sqlx::query_as::<_, Idea>("SELECT * FROM ideas ORDER BY id")
            .fetch_all(self.pool_manager.pool())
            .await?;

        debug!("Retrieved {} ideas", ideas.len());
        Ok(ideas)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, StorageError> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM ideas WHERE id = ?")
            .bind(id)
            .fetch_one(self.pool_manager.pool())
            .await?;

        Ok(row.0 > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM ideas WHERE id = ?")
            .bind(id)
            .execute(self.pool_manager.pool())
            .await?;

        debug!("Deleted idea id={} ({} rows)", id, result.rows_affected());
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM ideas")
            .execute(self.pool_manager.pool())
            .await?;

        info!("Deleted all ideas ({} rows)", result.rows_affected());
        Ok(())
    }

    async fn count(&self) -> Result<i64, StorageError> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM ideas")
            .fetch_one(self.pool_manager.pool())
            .await?;

        Ok(row.0)
    }
}
