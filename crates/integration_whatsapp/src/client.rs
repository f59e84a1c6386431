//! WhatsApp client for sending messages
//!
//! Uses the Meta Graph API to send WhatsApp messages. The underlying
//! `reqwest::Client` is built once and shared for the process lifetime.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

/// Per-call timeout for outbound Graph API requests
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// WhatsApp API errors
#[derive(Debug, Error)]
pub enum WhatsAppError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {code} - {message}")]
    Api { code: i32, message: String },

    #[error("Missing configuration: {0}")]
    Configuration(String),

    #[error("Empty recipient")]
    EmptyRecipient,

    #[error("Empty message body")]
    EmptyBody,
}

/// WhatsApp client configuration
#[derive(Debug, Clone)]
pub struct WhatsAppClientConfig {
    /// Meta Graph API access token
    pub access_token: String,
    /// Phone number ID from WhatsApp Business
    pub phone_number_id: String,
    /// API version (default: v19.0)
    pub api_version: String,
    /// Graph API base URL (overridable for tests)
    pub graph_base_url: String,
}

impl Default for WhatsAppClientConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            phone_number_id: String::new(),
            api_version: "v19.0".to_string(),
            graph_base_url: "https://graph.facebook.com".to_string(),
        }
    }
}

/// WhatsApp client for the Meta Graph API
#[derive(Debug, Clone)]
pub struct WhatsAppClient {
    client: Client,
    config: WhatsAppClientConfig,
    base_url: String,
}

/// Message send request
#[derive(Debug, Serialize)]
struct SendMessageRequest {
    messaging_product: &'static str,
    recipient_type: &'static str,
    to: String,
    #[serde(rename = "type")]
    msg_type: &'static str,
    text: TextContent,
}

#[derive(Debug, Serialize)]
struct TextContent {
    body: String,
}

/// API response for sent message
#[derive(Debug, Deserialize)]
pub struct SendMessageResponse {
    pub messaging_product: String,
    #[serde(default)]
    pub contacts: Vec<ContactInfo>,
    #[serde(default)]
    pub messages: Vec<MessageInfo>,
}

#[derive(Debug, Deserialize)]
pub struct ContactInfo {
    pub input: String,
    pub wa_id: String,
}

#[derive(Debug, Deserialize)]
pub struct MessageInfo {
    pub id: String,
}

/// API error response
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    code: i32,
    message: String,
}

impl WhatsAppClient {
    /// Create a new WhatsApp client
    pub fn new(config: WhatsAppClientConfig) -> Result<Self, WhatsAppError> {
        if config.access_token.is_empty() {
            return Err(WhatsAppError::Configuration(
                "access_token is required".to_string(),
            ));
        }
        if config.phone_number_id.is_empty() {
            return Err(WhatsAppError::Configuration(
                "phone_number_id is required".to_string(),
            ));
        }

        let base_url = format!(
            "{}/{}/{}",
            config.graph_base_url.trim_end_matches('/'),
            config.api_version,
            config.phone_number_id
        );

        let client = Client::builder().timeout(SEND_TIMEOUT).build()?;

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    /// Send a text message
    ///
    /// Empty recipient or body is rejected before any network I/O.
    #[instrument(skip(self, message), fields(to = %to))]
    pub async fn send_message(
        &self,
        to: &str,
        message: &str,
    ) -> Result<SendMessageResponse, WhatsAppError> {
        if to.is_empty() {
            return Err(WhatsAppError::EmptyRecipient);
        }
        if message.is_empty() {
            return Err(WhatsAppError::EmptyBody);
        }

        let request = SendMessageRequest {
            messaging_product: "whatsapp",
            recipient_type: "individual",
            to: to.to_string(),
            msg_type: "text",
            text: TextContent {
                body: message.to_string(),
            },
        };

        debug!(message_len = message.len(), "Sending WhatsApp message");

        let response = self
            .client
            .post(format!("{}/messages", self.base_url))
            .bearer_auth(&self.config.access_token)
            .json(&request)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            let error: ApiErrorResponse = response.json().await?;
            Err(WhatsAppError::Api {
                code: error.error.code,
                message: error.error.message,
            })
        }
    }

    /// Check if the WhatsApp API is reachable
    ///
    /// Read-only request against the phone number resource; never sends a
    /// message.
    #[instrument(skip(self))]
    pub async fn is_available(&self) -> bool {
        self.client
            .get(&self.base_url)
            .bearer_auth(&self.config.access_token)
            .send()
            .await
            .is_ok_and(|res| res.status().is_success())
    }
}
