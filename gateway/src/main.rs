use std::sync::Arc;

use clap::Parser;
use clientes_gateway::{
    shutdown_signal, Cli, ClientesService, ReqwestTransport, UPSTREAM_TIMEOUT,
};
use eyre::Result;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = cli.config()?;

    // RUST_LOG wins; otherwise -v, then the deployment mode, pick the level.
    let filter = match cli.verbose {
        0 => tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            if config.debug {
                "clientes_gateway=debug,tower_http=debug".into()
            } else {
                "clientes_gateway=info,tower_http=info".into()
            }
        }),
        1 => tracing_subscriber::EnvFilter::new("debug"),
        _ => tracing_subscriber::EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let transport = ReqwestTransport::new(UPSTREAM_TIMEOUT)?;
    let service = ClientesService::new(&config, Arc::new(transport));

    let listener = TcpListener::bind(cli.bind).await?;
    info!(
        addr = %cli.bind,
        upstream = %config.external_api_url,
        debug = config.debug,
        "clientes gateway listening"
    );

    clientes_gateway::run(listener, service, shutdown_signal()).await?;
    Ok(())
}
