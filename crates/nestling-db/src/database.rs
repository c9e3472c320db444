//! Database connection and table bootstrap.

use crate::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Main database handle.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open or create a database at the given sqlx URL
    /// (e.g. `sqlite://nestling.db` or `sqlite::memory:`).
    ///
    /// In-memory databases must use `max_connections = 1`, otherwise each
    /// pooled connection sees its own empty store.
    pub async fn open(url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create all tables if they don't exist and seed static board data.
    pub async fn initialize(&self) -> Result<()> {
        for ddl in TABLES {
            sqlx::query(ddl).execute(&self.pool).await?;
        }
        self.seed_community().await?;
        tracing::debug!("database initialized");
        Ok(())
    }

    /// Seed the community board with its starter questions. Runs only
    /// when the table is empty, so restarts don't duplicate rows.
    async fn seed_community(&self) -> Result<()> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM community_questions")
            .fetch_one(&self.pool)
            .await?;
        if count > 0 {
            return Ok(());
        }

        // Backdated so user-asked questions always sort above the seeds.
        for (i, (title, content, author, answers, likes)) in SEED_QUESTIONS.into_iter().enumerate()
        {
            sqlx::query(
                "INSERT INTO community_questions (id, title, content, author, answers, likes, created_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(uuid::Uuid::new_v4().to_string())
            .bind(title)
            .bind(content)
            .bind(author)
            .bind(answers)
            .bind(likes)
            .bind(chrono::Utc::now() - chrono::Duration::days(i as i64 + 1))
            .execute(&self.pool)
            .await?;
        }
        Ok(())
    }
}

const TABLES: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        email TEXT NOT NULL UNIQUE,
        full_name TEXT NOT NULL,
        password_hash TEXT NOT NULL,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS sessions (
        token TEXT PRIMARY KEY,
        user_id TEXT NOT NULL,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS children (
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL,
        name TEXT NOT NULL,
        date_of_birth TEXT NOT NULL,
        gender TEXT NOT NULL,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS feeding_logs (
        id TEXT PRIMARY KEY,
        child_id TEXT NOT NULL,
        feeding_type TEXT NOT NULL,
        amount TEXT,
        duration_minutes INTEGER,
        food_items TEXT NOT NULL DEFAULT '[]',
        notes TEXT,
        fed_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS sleep_logs (
        id TEXT PRIMARY KEY,
        child_id TEXT NOT NULL,
        sleep_start TEXT NOT NULL,
        sleep_end TEXT,
        duration_minutes INTEGER,
        sleep_quality TEXT,
        notes TEXT
    )",
    "CREATE TABLE IF NOT EXISTS growth_records (
        id TEXT PRIMARY KEY,
        child_id TEXT NOT NULL,
        measurement_date TEXT NOT NULL,
        height_cm REAL,
        weight_kg REAL,
        head_circumference_cm REAL,
        notes TEXT
    )",
    "CREATE TABLE IF NOT EXISTS vaccine_records (
        id TEXT PRIMARY KEY,
        child_id TEXT NOT NULL,
        vaccine_name TEXT NOT NULL,
        scheduled_date TEXT,
        administered_date TEXT,
        next_dose_date TEXT,
        provider TEXT,
        notes TEXT
    )",
    "CREATE TABLE IF NOT EXISTS photo_journal (
        id TEXT PRIMARY KEY,
        child_id TEXT NOT NULL,
        photo_url TEXT NOT NULL,
        caption TEXT,
        ai_tags TEXT NOT NULL DEFAULT '[]',
        date_taken TEXT NOT NULL,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS pediatrician_notes (
        id TEXT PRIMARY KEY,
        child_id TEXT NOT NULL,
        visit_date TEXT NOT NULL,
        provider_name TEXT,
        reason TEXT NOT NULL,
        diagnosis TEXT,
        prescriptions TEXT NOT NULL DEFAULT '[]',
        follow_up_date TEXT,
        notes TEXT
    )",
    "CREATE TABLE IF NOT EXISTS chat_conversations (
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL,
        title TEXT NOT NULL,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS chat_messages (
        id TEXT PRIMARY KEY,
        conversation_id TEXT NOT NULL,
        role TEXT NOT NULL,
        content TEXT NOT NULL,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS milestone_records (
        id TEXT PRIMARY KEY,
        child_id TEXT NOT NULL,
        milestone_id TEXT NOT NULL,
        achieved_date TEXT,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS community_questions (
        id TEXT PRIMARY KEY,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        author TEXT NOT NULL,
        answers INTEGER NOT NULL DEFAULT 0,
        likes INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS daily_insights (
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL,
        content TEXT NOT NULL,
        created_at TEXT NOT NULL
    )",
];

const SEED_QUESTIONS: [(&str, &str, &str, i64, i64); 4] = [
    (
        "How to handle separation anxiety in toddlers?",
        "My 18-month-old has severe separation anxiety and cries whenever I leave the room...",
        "Sarah M.",
        12,
        45,
    ),
    (
        "Best sleep schedule for a 6-month-old",
        "Trying to establish a consistent sleep routine. What has worked for others?...",
        "Mike T.",
        8,
        32,
    ),
    (
        "Dealing with picky eaters",
        "My 3-year-old refuses to eat anything except pasta. Any suggestions?...",
        "Emma L.",
        15,
        58,
    ),
    (
        "When should I start potty training?",
        "Signs to look for and tips that have worked for other parents?...",
        "John D.",
        20,
        67,
    ),
];
