//! Axum webhook endpoint for the ordersms service.
//!
//! The processing pipeline itself is framework-agnostic ([`processor`]);
//! [`routes`] supplies the Axum router, method/preflight handling and the
//! JSON + CORS response encoding.

pub mod processor;
pub mod routes;

pub use processor::{WebhookProcessor, WebhookReply, SKIP_MISSING_PHONE};
pub use routes::{order_webhook, router, AppState, HMAC_HEADER};
