use anyhow::{Context, Result};
use clap::Parser;
use inkbleed::Settings;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::parse();
    tracing::debug!(?settings, "starting");

    inkbleed::run(settings).context("startup failed")
}
