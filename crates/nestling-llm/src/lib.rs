//! Nestling LLM layer.
//!
//! A thin chat-completion client behind the [`ChatBackend`] trait, plus
//! the fixed assistant persona (system prompt, message assembly, and the
//! canned fallback replies used when the upstream is unavailable).

pub mod assistant;
pub mod backend;

pub use assistant::{build_messages, fallback_reply, EMPTY_REPLY, SYSTEM_PROMPT};
pub use backend::{ChatBackend, ChatRequest, ChatResponse, LlmError, Message, OpenAiCompatibleBackend};
