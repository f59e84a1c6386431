//! HTTP presentation layer
//!
//! This crate provides the webhook and health endpoints for the chatbot.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
