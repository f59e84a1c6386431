//! Health check handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Root response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// Simple health check at the root path
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "WhatsApp Business Chatbot is running".to_string(),
    })
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub whatsapp: ServiceStatus,
}

/// Status of a service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub healthy: bool,
}

/// Readiness check - can the bot reach the Graph API?
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let whatsapp_healthy = state.whatsapp.is_available().await;

    let status_code = if whatsapp_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(ReadinessResponse {
            ready: whatsapp_healthy,
            whatsapp: ServiceStatus {
                healthy: whatsapp_healthy,
            },
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn root_reports_running() {
        let response = root().await;
        assert_eq!(response.message, "WhatsApp Business Chatbot is running");
    }

    #[tokio::test]
    async fn health_check_returns_ok() {
        let response = health_check().await;
        assert_eq!(response.status, "ok");
        assert!(!response.version.is_empty());
    }

    #[test]
    fn root_response_serialization() {
        let resp = RootResponse {
            message: "running".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("message"));
        assert!(json.contains("running"));
    }

    #[test]
    fn health_response_serialization() {
        let resp = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("status"));
        assert!(json.contains("version"));
    }

    #[test]
    fn readiness_response_serialization() {
        let resp = ReadinessResponse {
            ready: false,
            whatsapp: ServiceStatus { healthy: false },
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("ready"));
        assert!(json.contains("whatsapp"));
        assert!(json.contains("healthy"));
    }
}
