//! nestling-common — shared errors, configuration, and domain catalogs
//! used across all Nestling crates.

pub mod config;
pub mod error;
pub mod milestones;
pub mod triage;

pub use config::Config;
pub use error::{ApiError, NestlingError, Result};
