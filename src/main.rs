use std::env;

use tokio::net::TcpListener;
use tracing::info;

use ponto_summary::api::{AppState, create_router};
use ponto_summary::config::ConfigLoader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config_dir = env::var("PONTO_CONFIG_DIR").unwrap_or_else(|_| "./config".to_string());
    let config = ConfigLoader::load(&config_dir)?;
    let bind_address = config.server().bind_address.clone();
    info!(
        config_dir = %config_dir,
        max_workers = config.batch().max_workers,
        document_timeout_secs = config.batch().document_timeout_secs,
        "Configuration loaded"
    );

    let app = create_router(AppState::with_pdf_extractor(config));

    let listener = TcpListener::bind(&bind_address).await?;
    info!("Server running on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
