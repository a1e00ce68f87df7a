//! BulkSMSBD REST client.
//!
//! The provider exposes a single GET endpoint taking the API key, message
//! type, destination, sender id and text as query parameters. The response
//! body is opaque text; delivery outcome is judged by the HTTP status only.

use async_trait::async_trait;
use ordersms_core::{mask_msisdn, DeliveryReport, SendRequest, SmsError, SmsGateway};

pub const DEFAULT_BASE_URL: &str = "http://bulksmsbd.net/api";

/// BulkSMSBD client holding fixed gateway credentials.
#[derive(Clone, Debug)]
pub struct BulkSmsBdClient {
    /// Account API key.
    pub api_key: String,
    /// Approved sender id (masking string).
    pub sender_id: String,
    /// API base URL; override for testing/mocking.
    pub base_url: String,
    http: reqwest::Client,
}

impl BulkSmsBdClient {
    pub fn new<S: Into<String>>(api_key: S, sender_id: S) -> Self {
        Self::with_base_url(api_key, sender_id, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url<S: Into<String>>(api_key: S, sender_id: S, base_url: String) -> Self {
        Self {
            api_key: api_key.into(),
            sender_id: sender_id.into(),
            base_url,
            http: reqwest::Client::new(),
        }
    }

    fn build_request(&self, req: &SendRequest<'_>) -> Result<reqwest::Request, SmsError> {
        let url = format!("{}/smsapi", self.base_url.trim_end_matches('/'));
        self.http
            .get(url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("type", "text"),
                ("number", req.to),
                ("senderid", self.sender_id.as_str()),
                ("message", req.text),
            ])
            .build()
            .map_err(|e| SmsError::Invalid(e.to_string()))
    }
}

#[async_trait]
impl SmsGateway for BulkSmsBdClient {
    async fn send(&self, req: SendRequest<'_>) -> Result<DeliveryReport, SmsError> {
        let request = self.build_request(&req)?;
        tracing::debug!(number = %mask_msisdn(req.to), "dispatching sms to gateway");

        let res = self
            .http
            .execute(request)
            .await
            .map_err(|e| SmsError::Http(e.to_string()))?;

        let accepted = res.status().is_success();
        // Opaque provider body; a failed read degrades to an empty string
        // instead of turning an answered request into a transport error.
        let provider_response = res.text().await.unwrap_or_default();

        Ok(DeliveryReport {
            accepted,
            provider_response,
        })
    }
}
