//! Community Q&A board repository.

use crate::database::Database;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CommunityQuestion {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub answers: i64,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewQuestion {
    pub title: String,
    pub content: String,
}

#[derive(Clone)]
pub struct CommunityRepository {
    pool: SqlitePool,
}

impl CommunityRepository {
    pub fn new(db: &Database) -> Self {
        Self { pool: db.pool().clone() }
    }

    pub async fn insert(&self, author: &str, new: NewQuestion) -> Result<CommunityQuestion> {
        let question = CommunityQuestion {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            content: new.content,
            author: author.to_string(),
            answers: 0,
            likes: 0,
            created_at: Utc::now(),
        };

        sqlx::query(
            "INSERT INTO community_questions (id, title, content, author, answers, likes, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&question.id)
        .bind(&question.title)
        .bind(&question.content)
        .bind(&question.author)
        .bind(question.answers)
        .bind(question.likes)
        .bind(question.created_at)
        .execute(&self.pool)
        .await?;

        Ok(question)
    }

    /// All questions, newest first.
    pub async fn list(&self) -> Result<Vec<CommunityQuestion>> {
        let questions = sqlx::query_as::<_, CommunityQuestion>(
            "SELECT * FROM community_questions ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }
}
