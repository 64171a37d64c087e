use axum::{Router, routing};
use pr_title_guard::api::{handle_webhook, healthz};
use pr_title_guard::github::HttpCommentPoster;
use pr_title_guard::{AppConfig, AppState};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::info;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Get config from environment
    let config = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt::init();

    let bind_address = config.bind_address.clone();
    let poster = HttpCommentPoster::new(config.github_token.clone());
    let state = Arc::new(AppState::new(config, poster));

    let app = Router::new()
        .route("/healthz", routing::get(healthz))
        .route("/webhook", routing::post(handle_webhook::<HttpCommentPoster>))
        // Turn any handler panic into a 500 so the server keeps running
        .layer(CatchPanicLayer::new())
        .with_state(state);

    info!("Listening on {}", bind_address);
    let listener = tokio::net::TcpListener::bind(&bind_address).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
