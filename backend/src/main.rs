use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod error;
mod handlers {
    pub mod contact_dtos;
    pub mod contact_handlers;
}
mod api {
    pub mod resend;
}
mod config {
    pub mod contact;
}

use api::resend::{EmailSender, ResendClient};
use config::contact::ContactConfig;
use handlers::contact_handlers;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    contact: ContactConfig,
    mailer: Arc<dyn EmailSender>,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route(
            "/api/send-email",
            post(contact_handlers::send_email).fallback(contact_handlers::method_not_allowed),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Error reporting is only wired up when a DSN is configured.
    let _guard = std::env::var("SENTRY_DSN").ok().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let state = Arc::new(AppState {
        contact: ContactConfig::from_env(),
        mailer: Arc::new(ResendClient::new()),
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("Contact relay listening on {}", bind_addr);
    axum::serve(listener, app(state).into_make_service()).await?;
    Ok(())
}
