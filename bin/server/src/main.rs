use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use waymark_server::{AppState, ServerConfig, router};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env().expect("failed to load configuration");

    let state = AppState::new();
    tracing::info!(
        tools = state.engine.tools().len(),
        "initialized engine with built-in tools"
    );

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("failed to bind to address");

    tracing::info!("listening on http://{}", config.listen_addr);

    axum::serve(listener, app).await.expect("server error");
}
