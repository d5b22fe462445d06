use anyhow::Context;

use bookshelf_api::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bookshelf_observability::init();

    let config = AppConfig::from_env()?;
    tracing::info!(?config, "starting");

    let app = bookshelf_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
