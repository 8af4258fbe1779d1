use dpr_qa::config::Config;
use dpr_qa::server::build_router;
use dpr_qa::server::startup::Services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // 1. Configuration:
    let config = Config::from_env()?;
    tracing::info!("Passages: {}", config.passages_path.display());

    // 2. Data (fatal on any failure):
    let services = Services::load(&config)?;
    tracing::info!("Ready to answer from {} records", services.store.len());

    // 3. HTTP Router:
    let app = build_router(&services);

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
