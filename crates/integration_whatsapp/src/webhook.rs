//! WhatsApp webhook payload types
//!
//! Deserializes the nested entry/change/value envelope the Business API
//! posts to the webhook. Every nested level defaults to empty when absent,
//! so partial payloads (status updates, unknown event kinds) parse cleanly
//! instead of failing the request.

use serde::Deserialize;

/// WhatsApp webhook payload
#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    pub object: String,
    #[serde(default)]
    pub entry: Vec<WebhookEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WebhookEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub changes: Vec<WebhookChange>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WebhookChange {
    #[serde(default)]
    pub value: WebhookValue,
    #[serde(default)]
    pub field: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct WebhookValue {
    #[serde(default)]
    pub messages: Vec<WebhookMessage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WebhookMessage {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub text: Option<TextMessage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TextMessage {
    #[serde(default)]
    pub body: String,
}

/// A message extracted from a webhook payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// Sender identifier (phone number)
    pub from: String,
    /// Message text, empty when the message carried no text
    pub body: String,
}

/// Extract all messages from a webhook payload.
///
/// Walks every entry and every change. A message without a `text` field
/// yields an empty body rather than being dropped, so the responder can
/// still answer with its fixed prompt.
pub fn extract_messages(payload: &WebhookPayload) -> Vec<InboundMessage> {
    let mut messages = Vec::new();

    for entry in &payload.entry {
        for change in &entry.changes {
            for message in &change.value.messages {
                messages.push(InboundMessage {
                    from: message.from.clone(),
                    body: message.text.as_ref().map(|t| t.body.clone()).unwrap_or_default(),
                });
            }
        }
    }

    messages
}
