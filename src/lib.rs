//! # ordersms
//!
//! Shopify order webhook receiver that sends a Bengali confirmation SMS
//! through the BulkSMSBD gateway.
//!
//! ## Pipeline
//!
//! - **Authenticate**: Shopify HMAC-SHA256 over the raw body, or a static
//!   `token` query parameter (one mode per deployment)
//! - **Extract**: destination phone from shipping address / customer /
//!   billing address, normalized to `880...` national format
//! - **Render**: configurable template interpolating name, order id, total
//!   and tracking URL
//! - **Dispatch**: one GET to the gateway, no retry; Shopify's own webhook
//!   redelivery provides resilience
//!
//! ## Configuration
//!
//! ```rust,ignore
//! use ordersms::AppConfig;
//!
//! let config = AppConfig::load()?;
//! println!("gateway sender: {}", config.gateway.sender_id);
//! ```
//!
//! Environment variables use the `ORDERSMS` prefix, e.g.
//! `ORDERSMS__GATEWAY__API_KEY`, `ORDERSMS__WEBHOOK__HMAC_SECRET`.

pub mod config;

pub use config::*;

/// Common imports for ordersms usage
pub mod prelude {
    pub use crate::config::{
        AppConfig, GatewayConfig, LoggingConfig, MessageConfig, ServerConfig, WebhookConfig,
    };
    pub use ordersms_bulksmsbd::BulkSmsBdClient;
    pub use ordersms_core::*;
    pub use ordersms_web_axum::{router, AppState, WebhookProcessor, WebhookReply};
}
