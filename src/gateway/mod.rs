pub mod extract;
pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use std::net::SocketAddr;

use axum::{
    Router,
    routing::{MethodRouter, get, post},
};
use tokio::net::TcpListener;
use tokio::signal;

use utoipa_swagger_ui::SwaggerUi;

use crate::arith::Variant;
use crate::config::GatewayConfig;
use handlers::{float, integer, method_not_allowed, not_found};
use state::AppState;

/// POST-only route; any other method gets the JSON 405 envelope.
fn post_only<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: axum::handler::Handler<T, AppState>,
    T: 'static,
{
    post(handler).fallback(method_not_allowed)
}

/// Arithmetic routes for one variant.
fn arithmetic_routes(variant: Variant) -> Router<AppState> {
    match variant {
        Variant::Integer => Router::new()
            .route("/add", post_only(integer::add))
            .route("/subtract", post_only(integer::subtract))
            .route("/multiply", post_only(integer::multiply))
            .route("/divide", post_only(integer::divide))
            .route("/sum", post_only(integer::sum)),
        Variant::Float => Router::new()
            .route("/add", post_only(float::add))
            .route("/subtract", post_only(float::subtract))
            .route("/multiply", post_only(float::multiply))
            .route("/divide", post_only(float::divide))
            .route("/sum", post_only(float::sum)),
    }
}

/// Build the complete router for `variant`.
pub fn router(variant: Variant) -> Router {
    arithmetic_routes(variant)
        .route(
            "/health",
            get(handlers::health_check).fallback(method_not_allowed),
        )
        .fallback(not_found)
        .with_state(AppState::new(variant))
        // Stateless, added after with_state
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::api_doc(variant)))
}

/// Start HTTP Gateway server
///
/// Runs until Ctrl-C / SIGTERM, then drains in-flight requests.
pub async fn run_server(config: &GatewayConfig) -> std::io::Result<()> {
    let variant = config.variant;
    let port = config.resolved_port();

    let listener = TcpListener::bind((config.host.as_str(), port)).await?;
    let addr: SocketAddr = listener.local_addr()?;

    tracing::info!("Gateway ({} variant) listening on http://{}", variant, addr);
    tracing::info!("API Docs: http://{}/docs", addr);

    axum::serve(listener, router(variant))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
