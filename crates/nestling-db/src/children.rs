//! Child repository.
//!
//! Children are the root of every per-feature log; ownership checks in
//! the web layer go through [`ChildRepository::find_by_id`].

use crate::database::Database;
use crate::error::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Child {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewChild {
    pub name: String,
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    pub gender: String,
}

#[derive(Clone)]
pub struct ChildRepository {
    pool: SqlitePool,
}

impl ChildRepository {
    pub fn new(db: &Database) -> Self {
        Self { pool: db.pool().clone() }
    }

    pub async fn insert(&self, user_id: &str, new: NewChild) -> Result<Child> {
        let child = Child {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: new.name,
            date_of_birth: new.date_of_birth,
            gender: new.gender,
            created_at: Utc::now(),
        };

        sqlx::query(
            "INSERT INTO children (id, user_id, name, date_of_birth, gender, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&child.id)
        .bind(&child.user_id)
        .bind(&child.name)
        .bind(child.date_of_birth)
        .bind(&child.gender)
        .bind(child.created_at)
        .execute(&self.pool)
        .await?;

        Ok(child)
    }

    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<Child>> {
        let children = sqlx::query_as::<_, Child>(
            "SELECT * FROM children WHERE user_id = ? ORDER BY created_at ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(children)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Child>> {
        let child = sqlx::query_as::<_, Child>("SELECT * FROM children WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(child)
    }

    /// Delete a child and every per-feature row that hangs off it.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        const CHILD_TABLES: [&str; 7] = [
            "feeding_logs",
            "sleep_logs",
            "growth_records",
            "vaccine_records",
            "photo_journal",
            "pediatrician_notes",
            "milestone_records",
        ];

        let mut tx = self.pool.begin().await?;
        for table in CHILD_TABLES {
            sqlx::query(&format!("DELETE FROM {table} WHERE child_id = ?"))
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }
        let res = sqlx::query("DELETE FROM children WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(res.rows_affected() > 0)
    }
}
