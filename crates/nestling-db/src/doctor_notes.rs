//! Pediatrician visit note repository.

use crate::database::Database;
use crate::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DoctorNote {
    pub id: String,
    pub child_id: String,
    pub visit_date: NaiveDate,
    pub provider_name: Option<String>,
    pub reason: String,
    pub diagnosis: Option<String>,
    pub prescriptions: Json<Vec<serde_json::Value>>,
    pub follow_up_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewDoctorNote {
    pub visit_date: NaiveDate,
    pub provider_name: Option<String>,
    pub reason: String,
    pub diagnosis: Option<String>,
    pub follow_up_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Clone)]
pub struct DoctorNoteRepository {
    pool: SqlitePool,
}

impl DoctorNoteRepository {
    pub fn new(db: &Database) -> Self {
        Self { pool: db.pool().clone() }
    }

    pub async fn insert(&self, child_id: &str, new: NewDoctorNote) -> Result<DoctorNote> {
        let note = DoctorNote {
            id: Uuid::new_v4().to_string(),
            child_id: child_id.to_string(),
            visit_date: new.visit_date,
            provider_name: new.provider_name,
            reason: new.reason,
            diagnosis: new.diagnosis,
            prescriptions: Json(Vec::new()),
            follow_up_date: new.follow_up_date,
            notes: new.notes,
        };

        sqlx::query(
            "INSERT INTO pediatrician_notes (id, child_id, visit_date, provider_name, reason, diagnosis, prescriptions, follow_up_date, notes)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&note.id)
        .bind(&note.child_id)
        .bind(note.visit_date)
        .bind(&note.provider_name)
        .bind(&note.reason)
        .bind(&note.diagnosis)
        .bind(&note.prescriptions)
        .bind(note.follow_up_date)
        .bind(&note.notes)
        .execute(&self.pool)
        .await?;

        Ok(note)
    }

    /// Most recent visits first.
    pub async fn list_by_child(&self, child_id: &str) -> Result<Vec<DoctorNote>> {
        let notes = sqlx::query_as::<_, DoctorNote>(
            "SELECT * FROM pediatrician_notes WHERE child_id = ? ORDER BY visit_date DESC",
        )
        .bind(child_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(notes)
    }

    /// Delete a note, but only when its child belongs to the given user.
    pub async fn delete(&self, id: &str, user_id: &str) -> Result<bool> {
        let res = sqlx::query(
            "DELETE FROM pediatrician_notes WHERE id = ?
             AND child_id IN (SELECT id FROM children WHERE user_id = ?)",
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() > 0)
    }
}
