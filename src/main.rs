use anyhow::Result;
use tracing::info;

use pdfcraft_site::config::Config;
use pdfcraft_site::server;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pdfcraft_site=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    info!("Starting PDFCraft site");

    // Load configuration from environment
    let config = Config::from_env()?;

    server::run_server(config).await
}
