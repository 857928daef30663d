//! Idea record model for persistence.
//!
//! Maps to the `ideas` table and is used by the store implementations.

use serde::{Deserialize, Serialize};

/// A single idea on the board.
///
/// `id` is `None` until the store assigns one on first save; once assigned it
/// never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Idea {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
}

impl Idea {
    /// Creates an unsaved idea; the store assigns the id.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
        }
    }
}
