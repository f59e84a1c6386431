//! Canned responder
//!
//! Classifies inbound text (case-insensitive, trimmed) and produces the
//! reply string. There is no conversation state; every message is
//! classified on its own.

use tracing::debug;

const HELP_TEXT: &str =
    "Available commands:\n/help - Show this help message\n/info - Get bot information";

const INFO_TEXT: &str =
    "WhatsApp Business Chatbot\nVersion: 1.0\nCreated to demonstrate chatbot functionality";

const EMPTY_PROMPT: &str = "Please send a valid message.";

/// Stateless keyword responder
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponderService;

impl ResponderService {
    /// Create a new responder
    pub fn new() -> Self {
        Self
    }

    /// Produce the reply for an inbound message body.
    ///
    /// The text is trimmed and lowercased before matching, so `/HELP` and
    /// `  /help  ` behave like `/help`.
    pub fn respond(&self, text: &str) -> String {
        let normalized = text.trim().to_lowercase();

        debug!(input_len = text.len(), "Classifying inbound message");

        match normalized.as_str() {
            "/help" => HELP_TEXT.to_string(),
            "/info" => INFO_TEXT.to_string(),
            "" => EMPTY_PROMPT.to_string(),
            other => format!(
                "You said: {other}. I'm a demo bot and can respond to /help and /info commands."
            ),
        }
    }
}
