//! Axum glue: routing, method/preflight handling, CORS headers and JSON
//! response encoding around the [`WebhookProcessor`].

use axum::{
    extract::{RawQuery, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Router,
};
use bytes::Bytes;
use serde::Deserialize;
use serde_json::json;

use crate::processor::{WebhookProcessor, WebhookReply, SKIP_MISSING_PHONE};

/// Shopify's signature header.
pub const HMAC_HEADER: &str = "x-shopify-hmac-sha256";

#[derive(Clone)]
pub struct AppState {
    pub processor: WebhookProcessor,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/order-sms", any(order_webhook))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

#[derive(Debug, Default, Deserialize)]
struct AuthQuery {
    token: Option<String>,
}

/// Single webhook endpoint; all methods land here so that the 405 body and
/// CORS headers stay under our control.
pub async fn order_webhook(
    State(state): State<AppState>,
    method: Method,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if method == Method::OPTIONS {
        return with_cors(StatusCode::NO_CONTENT.into_response());
    }
    if method != Method::POST {
        return with_cors(error_response(
            StatusCode::METHOD_NOT_ALLOWED,
            "method_not_allowed",
        ));
    }

    let hmac_header = headers.get(HMAC_HEADER).and_then(|v| v.to_str().ok());
    let token = query
        .as_deref()
        .and_then(|q| serde_urlencoded::from_str::<AuthQuery>(q).ok())
        .and_then(|q| q.token);

    let reply = state
        .processor
        .process(&body, hmac_header, token.as_deref())
        .await;

    with_cors(reply_to_response(reply))
}

fn reply_to_response(reply: WebhookReply) -> Response {
    match reply {
        WebhookReply::MissingSmsEnv => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "missing_sms_env")
        }
        WebhookReply::Unauthorized => error_response(StatusCode::UNAUTHORIZED, "unauthorized"),
        WebhookReply::Skipped => json_response(
            StatusCode::OK,
            json!({ "success": true, "skipped": SKIP_MISSING_PHONE }),
        ),
        WebhookReply::Dispatched {
            accepted,
            provider_response,
        } => json_response(
            StatusCode::OK,
            json!({ "success": accepted, "provider_response": provider_response }),
        ),
        WebhookReply::ServerError => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "server_error")
        }
    }
}

fn error_response(status: StatusCode, code: &str) -> Response {
    json_response(status, json!({ "success": false, "error": code }))
}

fn json_response(status: StatusCode, body: serde_json::Value) -> Response {
    (status, axum::Json(body)).into_response()
}

/// Every webhook response carries permissive CORS headers, preflight included.
fn with_cors(mut res: Response) -> Response {
    let headers = res.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, X-Shopify-Hmac-Sha256"),
    );
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_headers_are_attached() {
        let res = with_cors(StatusCode::NO_CONTENT.into_response());
        let h = res.headers();
        assert_eq!(h[header::ACCESS_CONTROL_ALLOW_ORIGIN.as_str()], "*");
        assert_eq!(
            h[header::ACCESS_CONTROL_ALLOW_METHODS.as_str()],
            "POST, OPTIONS"
        );
        assert_eq!(
            h[header::ACCESS_CONTROL_ALLOW_HEADERS.as_str()],
            "Content-Type, X-Shopify-Hmac-Sha256"
        );
    }

    #[test]
    fn token_query_parsing_ignores_unknown_params() {
        let q: AuthQuery = serde_urlencoded::from_str("foo=bar&token=abc").unwrap();
        assert_eq!(q.token.as_deref(), Some("abc"));
    }
}
