//! Webhook server binary: loads configuration, initializes tracing and
//! serves the Axum router.

use std::sync::Arc;

use ordersms::AppConfig;
use ordersms_bulksmsbd::BulkSmsBdClient;
use ordersms_web_axum::{router, AppState, WebhookProcessor};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(&config);

    if !config.gateway_configured() {
        // Keep serving so the deployment surfaces missing_sms_env per
        // request, matching lazy configuration reads.
        tracing::error!("gateway api_key / sender_id missing; webhooks will fail");
    }

    let gateway = BulkSmsBdClient::with_base_url(
        config.gateway.api_key.clone(),
        config.gateway.sender_id.clone(),
        config.gateway.base_url.clone(),
    );
    let processor = WebhookProcessor::new(
        config.auth_mode(),
        Arc::new(gateway),
        config.gateway_configured(),
        config.message.template.clone(),
    );
    let app = router(AppState { processor });

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };
    tracing::info!(%addr, "order-sms webhook server listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server exited");
        std::process::exit(1);
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
