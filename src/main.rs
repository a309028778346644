use bank::{Registry, config::Config, net::http};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "bank", version, about = "Bank account CRUD service")]
struct Args {
    /// TOML config file. Without it, settings are read from the environment (and .env)
    #[arg(long, short)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    let cfg = Arc::new(match args.config {
        Some(path) => Config::load(&path)?,
        None => Config::from_env()?,
    });
    tracing::debug!(storage = ?cfg.storage, "configuration loaded");

    let registry = Arc::new(Registry::from_config(cfg.clone()).await?);

    let addr: SocketAddr = cfg.http_addr.parse()?;
    tracing::info!(%addr, "bank http listening");
    if let Err(e) = http::serve(addr, registry).await {
        tracing::error!(error = %e, "http server failed");
        return Err(e.into());
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, prelude::*};

    if let Err(e) = color_eyre::install() {
        eprintln!("color-eyre already installed: {e}");
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_timer(tracing_subscriber::fmt::time::uptime()),
        )
        .with(tracing_error::ErrorLayer::default())
        .init();
}
