//! Nestling web server — the HTTP API for the parenting-support app.

pub mod auth;
pub mod handlers;
pub mod router;
pub mod state;
