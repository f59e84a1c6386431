//! Application state shared across handlers

use std::sync::Arc;

use application::ResponderService;
use infrastructure::AppConfig;
use integration_whatsapp::WhatsAppClient;

/// Shared application state
///
/// Built once at startup; everything here is read-only afterwards, so no
/// locking is needed across request tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Responder producing canned replies
    pub responder: Arc<ResponderService>,
    /// WhatsApp client with the shared outbound HTTP connection pool
    pub whatsapp: Arc<WhatsAppClient>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}
