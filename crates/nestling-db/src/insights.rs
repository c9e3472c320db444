//! Daily insight repository — short tips surfaced on the dashboard.

use crate::database::Database;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DailyInsight {
    pub id: String,
    pub user_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct InsightRepository {
    pool: SqlitePool,
}

impl InsightRepository {
    pub fn new(db: &Database) -> Self {
        Self { pool: db.pool().clone() }
    }

    pub async fn insert(&self, user_id: &str, content: &str) -> Result<DailyInsight> {
        let insight = DailyInsight {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            content: content.to_string(),
            created_at: Utc::now(),
        };

        sqlx::query(
            "INSERT INTO daily_insights (id, user_id, content, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&insight.id)
        .bind(&insight.user_id)
        .bind(&insight.content)
        .bind(insight.created_at)
        .execute(&self.pool)
        .await?;

        Ok(insight)
    }

    /// Give a fresh account its starter tips so the dashboard has
    /// content before any are generated.
    pub async fn seed_for_user(&self, user_id: &str) -> Result<()> {
        for content in STARTER_INSIGHTS {
            self.insert(user_id, content).await?;
        }
        Ok(())
    }

    /// The user's three most recent insights, newest first.
    pub async fn list_recent(&self, user_id: &str) -> Result<Vec<DailyInsight>> {
        let insights = sqlx::query_as::<_, DailyInsight>(
            "SELECT * FROM daily_insights WHERE user_id = ? ORDER BY created_at DESC LIMIT 3",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(insights)
    }
}

const STARTER_INSIGHTS: [&str; 3] = [
    "Consistent bedtime routines help children fall asleep faster and sleep longer.",
    "Offer a new food alongside a familiar favorite; it can take 10+ tries before a child accepts it.",
    "Narrating your day out loud builds your child's vocabulary long before they can talk back.",
];
