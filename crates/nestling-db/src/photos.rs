//! Photo journal repository.

use crate::database::Database;
use crate::error::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Photo {
    pub id: String,
    pub child_id: String,
    pub photo_url: String,
    pub caption: Option<String>,
    pub ai_tags: Json<Vec<String>>,
    pub date_taken: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPhoto {
    pub photo_url: String,
    pub caption: Option<String>,
    pub date_taken: NaiveDate,
}

#[derive(Clone)]
pub struct PhotoRepository {
    pool: SqlitePool,
}

impl PhotoRepository {
    pub fn new(db: &Database) -> Self {
        Self { pool: db.pool().clone() }
    }

    pub async fn insert(&self, child_id: &str, new: NewPhoto) -> Result<Photo> {
        let photo = Photo {
            id: Uuid::new_v4().to_string(),
            child_id: child_id.to_string(),
            photo_url: new.photo_url,
            caption: new.caption,
            ai_tags: Json(Vec::new()),
            date_taken: new.date_taken,
            created_at: Utc::now(),
        };

        sqlx::query(
            "INSERT INTO photo_journal (id, child_id, photo_url, caption, ai_tags, date_taken, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&photo.id)
        .bind(&photo.child_id)
        .bind(&photo.photo_url)
        .bind(&photo.caption)
        .bind(&photo.ai_tags)
        .bind(photo.date_taken)
        .bind(photo.created_at)
        .execute(&self.pool)
        .await?;

        Ok(photo)
    }

    /// Newest photos first.
    pub async fn list_by_child(&self, child_id: &str) -> Result<Vec<Photo>> {
        let photos = sqlx::query_as::<_, Photo>(
            "SELECT * FROM photo_journal WHERE child_id = ? ORDER BY date_taken DESC",
        )
        .bind(child_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(photos)
    }

    /// Delete a photo, but only when its child belongs to the given user.
    pub async fn delete(&self, id: &str, user_id: &str) -> Result<bool> {
        let res = sqlx::query(
            "DELETE FROM photo_journal WHERE id = ?
             AND child_id IN (SELECT id FROM children WHERE user_id = ?)",
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() > 0)
    }
}
