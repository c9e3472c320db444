//! Vaccine record repository.

use crate::database::Database;
use crate::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct VaccineRecord {
    pub id: String,
    pub child_id: String,
    pub vaccine_name: String,
    pub scheduled_date: Option<NaiveDate>,
    pub administered_date: Option<NaiveDate>,
    pub next_dose_date: Option<NaiveDate>,
    pub provider: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewVaccineRecord {
    pub vaccine_name: String,
    pub scheduled_date: Option<NaiveDate>,
    pub administered_date: Option<NaiveDate>,
    pub next_dose_date: Option<NaiveDate>,
    pub provider: Option<String>,
    pub notes: Option<String>,
}

#[derive(Clone)]
pub struct VaccineRepository {
    pool: SqlitePool,
}

impl VaccineRepository {
    pub fn new(db: &Database) -> Self {
        Self { pool: db.pool().clone() }
    }

    pub async fn insert(&self, child_id: &str, new: NewVaccineRecord) -> Result<VaccineRecord> {
        let record = VaccineRecord {
            id: Uuid::new_v4().to_string(),
            child_id: child_id.to_string(),
            vaccine_name: new.vaccine_name,
            scheduled_date: new.scheduled_date,
            administered_date: new.administered_date,
            next_dose_date: new.next_dose_date,
            provider: new.provider,
            notes: new.notes,
        };

        sqlx::query(
            "INSERT INTO vaccine_records (id, child_id, vaccine_name, scheduled_date, administered_date, next_dose_date, provider, notes)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.id)
        .bind(&record.child_id)
        .bind(&record.vaccine_name)
        .bind(record.scheduled_date)
        .bind(record.administered_date)
        .bind(record.next_dose_date)
        .bind(&record.provider)
        .bind(&record.notes)
        .execute(&self.pool)
        .await?;

        Ok(record)
    }

    /// Upcoming doses first (unscheduled records sort to the front).
    pub async fn list_by_child(&self, child_id: &str) -> Result<Vec<VaccineRecord>> {
        let records = sqlx::query_as::<_, VaccineRecord>(
            "SELECT * FROM vaccine_records WHERE child_id = ? ORDER BY scheduled_date ASC",
        )
        .bind(child_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    /// Delete a record, but only when its child belongs to the given user.
    pub async fn delete(&self, id: &str, user_id: &str) -> Result<bool> {
        let res = sqlx::query(
            "DELETE FROM vaccine_records WHERE id = ?
             AND child_id IN (SELECT id FROM children WHERE user_id = ?)",
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() > 0)
    }
}
