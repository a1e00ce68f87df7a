use config::{Config, ConfigError, Environment, File};
use ordersms_core::auth::AuthMode;
use ordersms_core::message::DEFAULT_TEMPLATE;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// BulkSMSBD gateway configuration
    pub gateway: GatewayConfig,
    /// Webhook authentication configuration
    pub webhook: WebhookConfig,
    /// Message template configuration
    pub message: MessageConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    /// Server host (default: 0.0.0.0)
    pub host: String,
    /// Server port (default: 3000)
    pub port: u16,
}

/// Gateway credentials and endpoint.
///
/// `api_key` and `sender_id` have no usable defaults; a deployment that
/// leaves them empty answers every webhook with `missing_sms_env`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GatewayConfig {
    pub api_key: String,
    pub sender_id: String,
    /// API base URL; override for testing/mocking.
    pub base_url: String,
}

/// Webhook authentication secrets. `hmac_secret` takes precedence over
/// `token` when both are set; with neither, every request is rejected.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct WebhookConfig {
    /// Shopify custom-app webhook secret (HMAC mode).
    pub hmac_secret: Option<String>,
    /// Static query-string token (token mode).
    pub token: Option<String>,
}

/// Message template configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MessageConfig {
    /// Confirmation text with `{name}`, `{order}`, `{total}`, `{url}`
    /// placeholders. Wording is replaceable; the field set is not.
    pub template: String,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Log level (default: info)
    pub level: String,
    /// Log format: json or pretty (default: json)
    pub format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            sender_id: String::new(),
            base_url: ordersms_bulksmsbd::DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "json".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            // Start with default configuration
            .add_source(Config::try_from(&AppConfig::default())?)
            // Add configuration file based on environment
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add local configuration file (gitignored)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with ORDERSMS_)
            .add_source(Environment::with_prefix("ORDERSMS").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Authentication mode, fixed once per process from the secrets present.
    pub fn auth_mode(&self) -> AuthMode {
        AuthMode::from_secrets(
            self.webhook.hmac_secret.as_deref(),
            self.webhook.token.as_deref(),
        )
    }

    /// Whether both gateway credentials are present.
    pub fn gateway_configured(&self) -> bool {
        !self.gateway.api_key.is_empty() && !self.gateway.sender_id.is_empty()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            gateway: GatewayConfig::default(),
            webhook: WebhookConfig::default(),
            message: MessageConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
