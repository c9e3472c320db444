//! The parenting-assistant persona: fixed system prompt, message
//! assembly, and canned fallback replies.

use crate::backend::Message;
use rand::seq::SliceRandom;

pub const SYSTEM_PROMPT: &str = "You are a helpful, empathetic parenting assistant with expertise in child development, psychology, and family wellness. Provide practical, evidence-based advice while being warm and supportive. Keep responses concise but informative. Always encourage professional consultation for serious medical or psychological concerns.";

/// Returned when the upstream answers successfully but with no text.
pub const EMPTY_REPLY: &str = "I'm sorry, I couldn't generate a response.";

const FALLBACK_RESPONSES: [&str; 4] = [
    "That's a great question! Here are some expert tips on this topic...",
    "Based on child development research, here's what I recommend...",
    "Many parents face this challenge. Let me share some proven strategies...",
    "This is an important concern. Here's what pediatricians suggest...",
];

const FALLBACK_NOTE: &str =
    "\n\n(Note: AI service temporarily unavailable. Using fallback responses.)";

/// Assemble the upstream message list: system prompt first, then the
/// prior turns, then the new user message.
pub fn build_messages(history: &[Message], message: &str) -> Vec<Message> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(Message::new("system", SYSTEM_PROMPT));
    messages.extend(history.iter().cloned());
    messages.push(Message::new("user", message));
    messages
}

/// A random canned reply with the unavailability note appended.
pub fn fallback_reply() -> String {
    let mut rng = rand::thread_rng();
    let sentence = FALLBACK_RESPONSES
        .choose(&mut rng)
        .copied()
        .unwrap_or(FALLBACK_RESPONSES[0]);
    format!("{sentence}{FALLBACK_NOTE}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_keep_prompt_history_message_order() {
        let history = vec![
            Message::new("user", "How do I start sleep training?"),
            Message::new("assistant", "Gradual routines work well..."),
        ];
        let messages = build_messages(&history, "And for naps?");

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].content, "How do I start sleep training?");
        assert_eq!(messages[2].role, "assistant");
        assert_eq!(messages[3].role, "user");
        assert_eq!(messages[3].content, "And for naps?");
    }

    #[test]
    fn test_empty_history_yields_prompt_and_message() {
        let messages = build_messages(&[], "hi");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].content, "hi");
    }

    #[test]
    fn test_fallback_reply_is_canned_sentence_plus_note() {
        let reply = fallback_reply();
        assert!(FALLBACK_RESPONSES.iter().any(|s| reply.starts_with(s)));
        assert!(reply.ends_with("Using fallback responses.)"));
    }
}
