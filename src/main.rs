mod app_system;
mod cart;
mod clients;
mod config;
mod domain;
mod http;
mod product;
mod resource_framework;
mod store;

#[cfg(test)]
mod test_fixtures;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use crate::app_system::{setup_tracing, ShopSystem};
use crate::config::{CliArgs, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = ServerConfig::from_args(CliArgs::parse())?;
    config.validate()?;

    info!(bind = %config.bind_address, "Starting shop API");

    let system = ShopSystem::from_config(&config);
    let listener = TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address))?;

    system.serve(listener).await
}
