use anyhow::Context;
use resource_actor::tracing::setup_tracing;
use storefront::config::Settings;
use storefront::http::{router, AppState};
use storefront::lifecycle::{default_catalog, OrderSystem};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let settings = Settings::load().context("failed to load settings")?;
    let addr = settings.bind_addr()?;
    info!(?settings, "Starting storefront");

    let system = OrderSystem::new(&settings);
    system
        .seed_catalog(default_catalog())
        .await
        .context("failed to seed catalog")?;

    let app = router(AppState::from_system(&system));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    system.shutdown().await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
