use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::clients::{CartClient, ProductClient};
use crate::config::ServerConfig;
use crate::domain::{Cart, Product};
use crate::http;
use crate::resource_framework::ResourceClient;
use crate::store::{CollectionStore, FileStore};

/// The application system: wires stores into clients and serves them.
///
/// Cloning is cheap; every clone shares the same stores. The system holds no
/// records itself, so requests only ever see what the stores return.
#[derive(Clone)]
pub struct ShopSystem {
    pub product_client: ProductClient,
    pub cart_client: CartClient,
}

impl ShopSystem {
    /// Builds the system over any pair of stores.
    ///
    /// **Startup Order:**
    /// 1. Product client (no dependencies)
    /// 2. Cart client, which is given the product client for existence checks
    pub fn new(
        products: Arc<dyn CollectionStore<Product>>,
        carts: Arc<dyn CollectionStore<Cart>>,
    ) -> Self {
        let product_client = ProductClient::new(ResourceClient::new(products));
        let cart_client = CartClient::new(ResourceClient::new(carts), product_client.clone());

        Self {
            product_client,
            cart_client,
        }
    }

    /// Builds the system over the collection files named in `config`.
    #[instrument(name = "shop_system", skip(config))]
    pub fn from_config(config: &ServerConfig) -> Self {
        info!(
            products = %config.products_file.display(),
            carts = %config.carts_file.display(),
            "Using collection files"
        );
        Self::new(
            Arc::new(FileStore::<Product>::new(&config.products_file)),
            Arc::new(FileStore::<Cart>::new(&config.carts_file)),
        )
    }

    pub fn router(&self) -> Router {
        http::router(self.clone())
    }

    /// Serves until Ctrl-C or SIGTERM, then lets in-flight requests finish.
    pub async fn serve(self, listener: TcpListener) -> anyhow::Result<()> {
        let addr = listener.local_addr()?;
        info!(bind = %addr, "Listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Shop system shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
