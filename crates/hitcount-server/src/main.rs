use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hitcount_server::{
    app_state::AppState,
    config::{self, Config},
    infra::RedisCounterStore,
    router,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = Config::from_env();
    tracing::info!(store = %cfg.redis_url(), "using counter store");

    let store = RedisCounterStore::open(&cfg.redis_url()).expect("invalid store url");
    let state = AppState::new(Arc::new(store));
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(config::LISTEN_ADDR)
        .await
        .expect("failed to bind");
    tracing::info!("listening on {}", config::LISTEN_ADDR);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server failed");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
