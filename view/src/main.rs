use std::io::Write;

use anyhow::Context;
use catalog_core::{ClientConfig, ProductService};
use catalog_view::ProductListView;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    info!(base_url = %config.base_url, "loading product catalog");

    let mut view = ProductListView::new(ProductService::connect(&config.base_url));
    view.mount();
    std::io::stdout()
        .write_all(view.render().as_bytes())
        .context("writing product list to stdout")?;

    Ok(())
}
