use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

const DEFAULT_HTTP_BIND: &str = "0.0.0.0:8080";
const DEFAULT_PRODUCTS_FILE: &str = "products.json";
const DEFAULT_CARTS_FILE: &str = "carts.json";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub data_dir: PathBuf,
    pub products_file: PathBuf,
    pub carts_file: PathBuf,
}

impl ServerConfig {
    /// Merges CLI/env values over the optional config file over defaults.
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let CliArgs {
            config,
            bind: cli_bind,
            data_dir: cli_data_dir,
            products_file: cli_products_file,
            carts_file: cli_carts_file,
        } = args;

        let file_config = if let Some(path) = config.as_ref() {
            load_config_file(path)?
        } else {
            PartialConfig::default()
        };

        let PartialConfig {
            bind: file_bind,
            data_dir: file_data_dir,
            products_file: file_products_file,
            carts_file: file_carts_file,
        } = file_config;

        let bind_address = match cli_bind.or(file_bind) {
            Some(addr) => addr,
            None => DEFAULT_HTTP_BIND
                .parse()
                .context("default bind address is invalid")?,
        };

        let data_dir = cli_data_dir
            .or(file_data_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        let resolve = |path: PathBuf| {
            if path.is_absolute() {
                path
            } else {
                data_dir.join(path)
            }
        };

        let products_file = resolve(
            cli_products_file
                .or(file_products_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PRODUCTS_FILE)),
        );
        let carts_file = resolve(
            cli_carts_file
                .or(file_carts_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CARTS_FILE)),
        );

        Ok(Self {
            bind_address,
            data_dir,
            products_file,
            carts_file,
        })
    }

    /// Fail-fast checks run before the server binds.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.products_file != self.carts_file,
            "products and carts must be stored in different files (both are {:?})",
            self.products_file
        );

        if self.data_dir.exists() {
            anyhow::ensure!(
                self.data_dir.is_dir(),
                "data directory {:?} is not a directory",
                self.data_dir
            );
        }

        for file in [&self.products_file, &self.carts_file] {
            anyhow::ensure!(
                !file.is_dir(),
                "collection file {:?} is a directory",
                file
            );
        }

        Ok(())
    }
}

#[derive(Parser, Debug, Default, Clone)]
#[command(name = "shop-api", about = "Product and cart REST API over JSON files", version)]
pub struct CliArgs {
    #[arg(long, value_name = "FILE", help = "Path to a JSON configuration file")]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        env = "SHOP_API_BIND",
        value_name = "ADDR",
        help = "Address the HTTP server listens on"
    )]
    pub bind: Option<SocketAddr>,

    #[arg(
        long,
        env = "SHOP_API_DATA_DIR",
        value_name = "DIR",
        help = "Directory holding the collection files"
    )]
    pub data_dir: Option<PathBuf>,

    #[arg(
        long,
        env = "SHOP_API_PRODUCTS_FILE",
        value_name = "FILE",
        help = "Products collection file, relative to the data directory"
    )]
    pub products_file: Option<PathBuf>,

    #[arg(
        long,
        env = "SHOP_API_CARTS_FILE",
        value_name = "FILE",
        help = "Carts collection file, relative to the data directory"
    )]
    pub carts_file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    bind: Option<SocketAddr>,
    data_dir: Option<PathBuf>,
    products_file: Option<PathBuf>,
    carts_file: Option<PathBuf>,
}

fn load_config_file(path: &Path) -> Result<PartialConfig> {
    if !path.exists() {
        anyhow::bail!("config file {:?} does not exist", path);
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {:?}", path))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse JSON config {:?}", path))
}
