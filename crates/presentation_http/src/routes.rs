//! Route definitions

use axum::{
    Router,
    routing::get,
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // WhatsApp webhook (verification handshake + message events)
        .route(
            "/webhook",
            get(handlers::whatsapp::verify_webhook).post(handlers::whatsapp::handle_webhook),
        )
        // Attach state
        .with_state(state)
}
