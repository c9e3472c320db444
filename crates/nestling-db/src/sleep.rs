//! Sleep log repository.

use crate::database::Database;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SleepLog {
    pub id: String,
    pub child_id: String,
    pub sleep_start: DateTime<Utc>,
    pub sleep_end: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i64>,
    pub sleep_quality: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewSleepLog {
    pub sleep_start: DateTime<Utc>,
    pub sleep_end: Option<DateTime<Utc>>,
    pub sleep_quality: Option<String>,
    pub notes: Option<String>,
}

#[derive(Clone)]
pub struct SleepRepository {
    pool: SqlitePool,
}

impl SleepRepository {
    pub fn new(db: &Database) -> Self {
        Self { pool: db.pool().clone() }
    }

    /// Insert a sleep log. Duration is derived from start/end when an
    /// end time is present.
    pub async fn insert(&self, child_id: &str, new: NewSleepLog) -> Result<SleepLog> {
        let duration_minutes = new
            .sleep_end
            .map(|end| (end - new.sleep_start).num_minutes());

        let log = SleepLog {
            id: Uuid::new_v4().to_string(),
            child_id: child_id.to_string(),
            sleep_start: new.sleep_start,
            sleep_end: new.sleep_end,
            duration_minutes,
            sleep_quality: new.sleep_quality,
            notes: new.notes,
        };

        sqlx::query(
            "INSERT INTO sleep_logs (id, child_id, sleep_start, sleep_end, duration_minutes, sleep_quality, notes)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&log.id)
        .bind(&log.child_id)
        .bind(log.sleep_start)
        .bind(log.sleep_end)
        .bind(log.duration_minutes)
        .bind(&log.sleep_quality)
        .bind(&log.notes)
        .execute(&self.pool)
        .await?;

        Ok(log)
    }

    /// Latest sleeps first, capped at the 10 most recent.
    pub async fn list_by_child(&self, child_id: &str) -> Result<Vec<SleepLog>> {
        let logs = sqlx::query_as::<_, SleepLog>(
            "SELECT * FROM sleep_logs WHERE child_id = ? ORDER BY sleep_start DESC LIMIT 10",
        )
        .bind(child_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(logs)
    }

    /// Delete a log, but only when its child belongs to the given user.
    pub async fn delete(&self, id: &str, user_id: &str) -> Result<bool> {
        let res = sqlx::query(
            "DELETE FROM sleep_logs WHERE id = ?
             AND child_id IN (SELECT id FROM children WHERE user_id = ?)",
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() > 0)
    }
}
