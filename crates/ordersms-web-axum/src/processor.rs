//! Framework-agnostic webhook processing.
//!
//! [`WebhookProcessor::process`] runs the authenticated part of the pipeline
//! (credentials check, authentication, phone extraction, render, dispatch)
//! and returns a terminal [`WebhookReply`]. Method handling and response
//! encoding live in the HTTP layer.

use std::sync::Arc;

use ordersms_core::auth::{authenticate, AuthMode};
use ordersms_core::message::{render, MessageFields};
use ordersms_core::msisdn;
use ordersms_core::order::OrderPayload;
use ordersms_core::{mask_msisdn, SendRequest, SmsGateway};

/// Skip marker reported when an order carries no deliverable phone.
pub const SKIP_MISSING_PHONE: &str = "missing_or_invalid_phone";

/// Terminal outcome of one webhook delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookReply {
    /// Gateway credentials are not configured; operator error.
    MissingSmsEnv,
    /// Authentication failed or is unconfigured.
    Unauthorized,
    /// Valid webhook without a deliverable phone; nothing to do.
    Skipped,
    /// Gateway was invoked once; `accepted` mirrors its transport status.
    Dispatched {
        accepted: bool,
        provider_response: String,
    },
    /// Internal failure (e.g. no transport-level gateway response at all).
    ServerError,
}

#[derive(Clone)]
pub struct WebhookProcessor {
    auth: AuthMode,
    gateway: Arc<dyn SmsGateway>,
    gateway_configured: bool,
    template: String,
}

impl WebhookProcessor {
    pub fn new(
        auth: AuthMode,
        gateway: Arc<dyn SmsGateway>,
        gateway_configured: bool,
        template: String,
    ) -> Self {
        Self {
            auth,
            gateway,
            gateway_configured,
            template,
        }
    }

    /// Process one POSTed webhook body.
    ///
    /// `raw_body` must be the bytes exactly as received; HMAC verification
    /// runs over them before any parsing.
    pub async fn process(
        &self,
        raw_body: &[u8],
        hmac_header: Option<&str>,
        query_token: Option<&str>,
    ) -> WebhookReply {
        if !self.gateway_configured {
            tracing::error!("gateway api_key / sender_id not configured");
            return WebhookReply::MissingSmsEnv;
        }

        if !authenticate(&self.auth, raw_body, hmac_header, query_token) {
            tracing::warn!("webhook rejected: authentication failed");
            return WebhookReply::Unauthorized;
        }

        let order = OrderPayload::from_bytes(raw_body);
        let number = msisdn::normalize(order.phone().unwrap_or(""));
        if !msisdn::is_deliverable(&number) {
            tracing::info!(order = %order.order_id(), "no deliverable phone, skipping");
            return WebhookReply::Skipped;
        }

        let fields = MessageFields::from_order(&order);
        let text = render(&self.template, &fields);

        match self
            .gateway
            .send(SendRequest {
                to: &number,
                text: &text,
            })
            .await
        {
            Ok(report) => {
                if report.accepted {
                    tracing::info!(
                        order = %fields.order_id,
                        number = %mask_msisdn(&number),
                        "confirmation sms dispatched"
                    );
                } else {
                    tracing::warn!(
                        order = %fields.order_id,
                        number = %mask_msisdn(&number),
                        provider_response = %report.provider_response,
                        "gateway refused message"
                    );
                }
                WebhookReply::Dispatched {
                    accepted: report.accepted,
                    provider_response: report.provider_response,
                }
            }
            Err(e) => {
                tracing::error!(error = %e, order = %fields.order_id, "gateway call failed");
                WebhookReply::ServerError
            }
        }
    }
}
