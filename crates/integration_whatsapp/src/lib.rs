//! WhatsApp integration
//!
//! Handles WhatsApp Business API webhook payloads and message sending.

pub mod client;
pub mod webhook;

pub use client::{SendMessageResponse, WhatsAppClient, WhatsAppClientConfig, WhatsAppError};
pub use webhook::{InboundMessage, WebhookPayload, extract_messages};
