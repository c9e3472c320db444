//! Nestling database layer.
//!
//! SQLite persistence via sqlx, one repository per entity. Tables are
//! created on startup if missing; there is no migrations system.
//!
//! # Example
//!
//! ```rust,no_run
//! use nestling_db::{Database, ChildRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::open("sqlite://nestling.db", 10).await?;
//!     db.initialize().await?;
//!
//!     let children = ChildRepository::new(&db);
//!     Ok(())
//! }
//! ```

pub mod chat;
pub mod children;
pub mod community;
pub mod database;
pub mod doctor_notes;
pub mod error;
pub mod feeding;
pub mod growth;
pub mod insights;
pub mod milestones;
pub mod photos;
pub mod sleep;
pub mod users;
pub mod vaccines;

pub use chat::{ChatMessage, ChatRepository, Conversation, NewChatMessage};
pub use children::{Child, ChildRepository, NewChild};
pub use community::{CommunityQuestion, CommunityRepository, NewQuestion};
pub use database::Database;
pub use doctor_notes::{DoctorNote, DoctorNoteRepository, NewDoctorNote};
pub use error::{DbError, Result};
pub use feeding::{FeedingLog, FeedingRepository, NewFeedingLog};
pub use growth::{GrowthRecord, GrowthRepository, NewGrowthRecord};
pub use insights::{DailyInsight, InsightRepository};
pub use milestones::{MilestoneRecord, MilestoneRepository, NewMilestoneRecord};
pub use photos::{NewPhoto, Photo, PhotoRepository};
pub use sleep::{NewSleepLog, SleepLog, SleepRepository};
pub use users::{NewUser, Session, User, UserRepository};
pub use vaccines::{NewVaccineRecord, VaccineRecord, VaccineRepository};
