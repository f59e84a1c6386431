//! WhatsApp Business Chatbot server
//!
//! Main entry point for the webhook receiver.

use std::{sync::Arc, time::Duration};

use application::ResponderService;
use infrastructure::AppConfig;
use integration_whatsapp::{WhatsAppClient, WhatsAppClientConfig};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chatbot_server=debug,presentation_http=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "WhatsApp Business Chatbot v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    // Load configuration (read once; no hot reload)
    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    info!(
        host = %config.server.host,
        port = %config.server.port,
        api_version = %config.whatsapp.api_version,
        "Configuration loaded"
    );

    // Build the shared WhatsApp client once; it lives for the whole process
    let access_token = config
        .whatsapp
        .access_token_str()
        .ok_or_else(|| anyhow::anyhow!("whatsapp.access_token is not configured"))?
        .to_string();
    let phone_number_id = config
        .whatsapp
        .phone_number_id
        .clone()
        .ok_or_else(|| anyhow::anyhow!("whatsapp.phone_number_id is not configured"))?;

    let whatsapp = WhatsAppClient::new(WhatsAppClientConfig {
        access_token,
        phone_number_id,
        api_version: config.whatsapp.api_version.clone(),
        graph_base_url: config.whatsapp.graph_base_url.clone(),
    })?;

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));
    let addr = format!("{}:{}", config.server.host, config.server.port);

    // Create app state
    let state = AppState {
        responder: Arc::new(ResponderService::new()),
        whatsapp: Arc::new(whatsapp),
        config: Arc::new(config),
    };

    // Build router
    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    // Start server
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("Waiting up to {:?} for connections to close...", timeout);
    // Connection draining is handled by axum's graceful_shutdown
}
