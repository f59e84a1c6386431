//! Application configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// WhatsApp Business API configuration
    #[serde(default)]
    pub whatsapp: WhatsAppConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Graceful shutdown timeout in seconds
    #[serde(default)]
    pub shutdown_timeout_secs: Option<u64>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            shutdown_timeout_secs: None,
        }
    }
}

/// WhatsApp Business API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhatsAppConfig {
    /// Meta Graph API access token (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub access_token: Option<SecretString>,

    /// Phone number ID from WhatsApp Business
    #[serde(default)]
    pub phone_number_id: Option<String>,

    /// WhatsApp Business account ID
    #[serde(default)]
    pub business_account_id: Option<String>,

    /// Verify token for the webhook subscription handshake (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub verify_token: Option<SecretString>,

    /// Graph API version
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Graph API base URL (overridable for tests)
    #[serde(default = "default_graph_base_url")]
    pub graph_base_url: String,
}

fn default_api_version() -> String {
    "v19.0".to_string()
}

fn default_graph_base_url() -> String {
    "https://graph.facebook.com".to_string()
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            phone_number_id: None,
            business_account_id: None,
            verify_token: None,
            api_version: default_api_version(),
            graph_base_url: default_graph_base_url(),
        }
    }
}

impl WhatsAppConfig {
    /// Get the access token as a string reference
    #[must_use]
    pub fn access_token_str(&self) -> Option<&str> {
        self.access_token.as_ref().map(ExposeSecret::expose_secret)
    }

    /// Get the verify token as a string reference (for the webhook handshake)
    #[must_use]
    pub fn verify_token_str(&self) -> Option<&str> {
        self.verify_token.as_ref().map(ExposeSecret::expose_secret)
    }
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., CHATBOT_WHATSAPP__ACCESS_TOKEN)
            .add_source(
                config::Environment::with_prefix("CHATBOT")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
