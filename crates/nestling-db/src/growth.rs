//! Growth record repository.

use crate::database::Database;
use crate::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct GrowthRecord {
    pub id: String,
    pub child_id: String,
    pub measurement_date: NaiveDate,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub head_circumference_cm: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewGrowthRecord {
    pub measurement_date: NaiveDate,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub head_circumference_cm: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Clone)]
pub struct GrowthRepository {
    pool: SqlitePool,
}

impl GrowthRepository {
    pub fn new(db: &Database) -> Self {
        Self { pool: db.pool().clone() }
    }

    pub async fn insert(&self, child_id: &str, new: NewGrowthRecord) -> Result<GrowthRecord> {
        let record = GrowthRecord {
            id: Uuid::new_v4().to_string(),
            child_id: child_id.to_string(),
            measurement_date: new.measurement_date,
            height_cm: new.height_cm,
            weight_kg: new.weight_kg,
            head_circumference_cm: new.head_circumference_cm,
            notes: new.notes,
        };

        sqlx::query(
            "INSERT INTO growth_records (id, child_id, measurement_date, height_cm, weight_kg, head_circumference_cm, notes)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.id)
        .bind(&record.child_id)
        .bind(record.measurement_date)
        .bind(record.height_cm)
        .bind(record.weight_kg)
        .bind(record.head_circumference_cm)
        .bind(&record.notes)
        .execute(&self.pool)
        .await?;

        Ok(record)
    }

    /// Most recent measurements first.
    pub async fn list_by_child(&self, child_id: &str) -> Result<Vec<GrowthRecord>> {
        let records = sqlx::query_as::<_, GrowthRecord>(
            "SELECT * FROM growth_records WHERE child_id = ? ORDER BY measurement_date DESC",
        )
        .bind(child_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    /// Delete a record, but only when its child belongs to the given user.
    pub async fn delete(&self, id: &str, user_id: &str) -> Result<bool> {
        let res = sqlx::query(
            "DELETE FROM growth_records WHERE id = ?
             AND child_id IN (SELECT id FROM children WHERE user_id = ?)",
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() > 0)
    }
}
