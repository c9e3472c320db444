//! Feeding log repository.

use crate::database::Database;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FeedingLog {
    pub id: String,
    pub child_id: String,
    /// breastfeeding | bottle | solid_food | snack
    pub feeding_type: String,
    pub amount: Option<String>,
    pub duration_minutes: Option<i64>,
    pub food_items: Json<Vec<String>>,
    pub notes: Option<String>,
    pub fed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewFeedingLog {
    pub feeding_type: String,
    pub amount: Option<String>,
    pub duration_minutes: Option<i64>,
    #[serde(default)]
    pub food_items: Vec<String>,
    pub notes: Option<String>,
    pub fed_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct FeedingRepository {
    pool: SqlitePool,
}

impl FeedingRepository {
    pub fn new(db: &Database) -> Self {
        Self { pool: db.pool().clone() }
    }

    pub async fn insert(&self, child_id: &str, new: NewFeedingLog) -> Result<FeedingLog> {
        let log = FeedingLog {
            id: Uuid::new_v4().to_string(),
            child_id: child_id.to_string(),
            feeding_type: new.feeding_type,
            amount: new.amount,
            duration_minutes: new.duration_minutes,
            food_items: Json(new.food_items),
            notes: new.notes,
            fed_at: new.fed_at,
        };

        sqlx::query(
            "INSERT INTO feeding_logs (id, child_id, feeding_type, amount, duration_minutes, food_items, notes, fed_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&log.id)
        .bind(&log.child_id)
        .bind(&log.feeding_type)
        .bind(&log.amount)
        .bind(log.duration_minutes)
        .bind(&log.food_items)
        .bind(&log.notes)
        .bind(log.fed_at)
        .execute(&self.pool)
        .await?;

        Ok(log)
    }

    /// Latest feedings first, capped at the 20 most recent.
    pub async fn list_by_child(&self, child_id: &str) -> Result<Vec<FeedingLog>> {
        let logs = sqlx::query_as::<_, FeedingLog>(
            "SELECT * FROM feeding_logs WHERE child_id = ? ORDER BY fed_at DESC LIMIT 20",
        )
        .bind(child_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(logs)
    }

    /// Delete a log, but only when its child belongs to the given user.
    pub async fn delete(&self, id: &str, user_id: &str) -> Result<bool> {
        let res = sqlx::query(
            "DELETE FROM feeding_logs WHERE id = ?
             AND child_id IN (SELECT id FROM children WHERE user_id = ?)",
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() > 0)
    }
}
