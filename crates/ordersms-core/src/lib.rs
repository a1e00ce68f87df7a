//! # ordersms-core
//!
//! Domain types and pure logic for the order-confirmation SMS service:
//! - [`SmsGateway`] trait for dispatching a rendered message
//! - Webhook authentication ([`auth`]): Shopify HMAC or static-token mode
//! - Bangladeshi phone normalization and validity ([`msisdn`])
//! - Order payload model and message rendering ([`order`], [`message`])
//!
//! ## Example
//!
//! ```rust,ignore
//! use ordersms_core::{SendRequest, SmsGateway};
//!
//! // Any gateway backend implements SmsGateway
//! let report = gateway.send(SendRequest {
//!     to: "8801712345678",
//!     text: "order confirmed",
//! }).await?;
//! ```

pub mod auth;
pub mod message;
pub mod msisdn;
pub mod order;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Errors that can occur while talking to an SMS gateway
#[derive(Debug, thiserror::Error)]
pub enum SmsError {
    /// HTTP communication error (no transport-level response at all)
    #[error("http error: {0}")]
    Http(String),
    /// Invalid request parameters
    #[error("invalid request: {0}")]
    Invalid(String),
}

/// A single outbound SMS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendRequest<'a> {
    /// Destination in canonical `880...` national format.
    pub to: &'a str,
    /// Rendered message text, UTF-8.
    pub text: &'a str,
}

/// Outcome of one gateway attempt.
///
/// `accepted` reflects the transport-level HTTP status only; the provider
/// body is carried verbatim so callers can inspect provider-specific codes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryReport {
    pub accepted: bool,
    /// Raw provider payload for debugging / audit.
    pub provider_response: String,
}

#[async_trait]
pub trait SmsGateway: Send + Sync {
    /// Send a single text SMS. One attempt, no retry.
    async fn send(&self, req: SendRequest<'_>) -> Result<DeliveryReport, SmsError>;
}

/// Elide the middle digits of a destination number for log output.
pub fn mask_msisdn(number: &str) -> String {
    if !number.is_ascii() || number.len() < 8 {
        return "***".to_string();
    }
    let head = &number[..5];
    let tail = &number[number.len() - 2..];
    format!("{}{}{}", head, "*".repeat(number.len() - 7), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_middle_digits() {
        assert_eq!(mask_msisdn("8801712345678"), "88017******78");
    }

    #[test]
    fn short_input_is_fully_masked() {
        assert_eq!(mask_msisdn("1234"), "***");
        assert_eq!(mask_msisdn(""), "***");
    }
}
