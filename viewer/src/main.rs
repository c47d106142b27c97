use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod page;
mod viewer_args;
mod webview;

use viewer_args::ViewerArgs;

#[tokio::main]
async fn main() -> Result<()> {
    let args = ViewerArgs::parse();

    if args.pretty {
        tracing_subscriber::registry()
            .with(fmt::layer().with_thread_ids(true).pretty())
            .with(EnvFilter::from_default_env())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_thread_ids(true))
            .with(EnvFilter::from_default_env())
            .init();
    }

    let store = space_lib::loader::from_dir(&args.data_dir)
        .with_context(|| format!("load datasets from {}", args.data_dir.display()))?;
    let store = Arc::new(store);
    info!(listen = %args.listen, periods = ?store.periods(), "serving product space viewer");

    let routes = webview::setup_routes(store);
    tokio::select! {
        _ = warp::serve(routes).run(args.listen) => {}
        _ = signal::ctrl_c() => {}
    }

    Ok(())
}
