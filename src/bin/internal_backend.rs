use catalog_stack::internal;
use catalog_stack::state::InternalState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "5001".to_string());

    let state = InternalState::new(internal::seed_catalog());
    let app = internal::create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("Failed to bind internal backend port");

    tracing::info!(%port, "internal backend running");
    tracing::info!("this service should only be reachable by the main backend");

    axum::serve(listener, app)
        .await
        .expect("Failed to start HTTP server");
}
