use catalog_stack::handlers;
use catalog_stack::state::GatewayState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "5002".to_string());
    let internal_backend_url = std::env::var("INTERNAL_BACKEND_URL")
        .unwrap_or_else(|_| "http://localhost:5001".to_string());

    let state = GatewayState::new(&internal_backend_url);
    let app = handlers::create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("Failed to bind gateway port");

    tracing::info!(%port, "main backend running");
    tracing::info!(url = %internal_backend_url, "connected to internal backend");

    axum::serve(listener, app)
        .await
        .expect("Failed to start HTTP server");
}
