use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use ipv4_relay::config::load_config;
use ipv4_relay::core::error::AppError;
use ipv4_relay::core::http_client::{NOTIFY_TIMEOUT, build_http_client};
use ipv4_relay::features::lookup::{CandidateHeaders, LookupService};
use ipv4_relay::features::notify::{Notifier, WebhookNotifier};
use ipv4_relay::server::{AppState, build_router};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_tracing();

    let config = load_config()?;

    let notifier: Option<Arc<dyn Notifier>> = match config.webhook_url.clone() {
        Some(url) => {
            let http_client = build_http_client(config.disable_proxy, NOTIFY_TIMEOUT)
                .map_err(|err| AppError::internal(format!("failed to build HTTP client: {err}")))?;
            let notifier: Arc<dyn Notifier> = Arc::new(WebhookNotifier::new(http_client, url));
            Some(notifier)
        }
        None => {
            tracing::info!("no webhook configured, notifications disabled");
            None
        }
    };

    let service = Arc::new(LookupService::new(CandidateHeaders::default(), notifier));
    let app = build_router(AppState::new(service));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(%addr, "starting server");
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|err| AppError::internal(format!("failed to bind: {err}")))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|err| AppError::internal(format!("server error: {err}")))?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}
