use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use cardroom_server::{Api, Config, Registry};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    let registry = Arc::new(Registry::new());
    let api = Api::new(registry, config.static_dir.clone());

    let addr: SocketAddr = config
        .listen_addr()
        .parse()
        .context("invalid listen addr")?;
    info!(%addr, static_dir = %config.static_dir, "deck service listening");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, api.router()).await?;
    Ok(())
}
