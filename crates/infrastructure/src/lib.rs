//! Infrastructure layer - configuration
//!
//! Loads application settings from an optional `config.toml` plus
//! `CHATBOT_*` environment variables, read once at startup.

pub mod config;

pub use config::{AppConfig, ServerConfig, WhatsAppConfig};
