//! Per-child milestone achievement repository.
//!
//! A row's presence means the catalog milestone is achieved for that
//! child; clearing an achievement deletes the row.

use crate::database::Database;
use crate::error::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MilestoneRecord {
    pub id: String,
    pub child_id: String,
    /// Id of the catalog entry (see nestling_common::milestones).
    pub milestone_id: String,
    pub achieved_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewMilestoneRecord {
    pub milestone_id: String,
    pub achieved_date: Option<NaiveDate>,
}

#[derive(Clone)]
pub struct MilestoneRepository {
    pool: SqlitePool,
}

impl MilestoneRepository {
    pub fn new(db: &Database) -> Self {
        Self { pool: db.pool().clone() }
    }

    pub async fn insert(&self, child_id: &str, new: NewMilestoneRecord) -> Result<MilestoneRecord> {
        let record = MilestoneRecord {
            id: Uuid::new_v4().to_string(),
            child_id: child_id.to_string(),
            milestone_id: new.milestone_id,
            achieved_date: new.achieved_date,
            created_at: Utc::now(),
        };

        sqlx::query(
            "INSERT INTO milestone_records (id, child_id, milestone_id, achieved_date, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&record.id)
        .bind(&record.child_id)
        .bind(&record.milestone_id)
        .bind(record.achieved_date)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn list_by_child(&self, child_id: &str) -> Result<Vec<MilestoneRecord>> {
        let records = sqlx::query_as::<_, MilestoneRecord>(
            "SELECT * FROM milestone_records WHERE child_id = ? ORDER BY created_at ASC",
        )
        .bind(child_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    /// Clear an achievement, but only when its child belongs to the given user.
    pub async fn delete(&self, id: &str, user_id: &str) -> Result<bool> {
        let res = sqlx::query(
            "DELETE FROM milestone_records WHERE id = ?
             AND child_id IN (SELECT id FROM children WHERE user_id = ?)",
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() > 0)
    }
}
