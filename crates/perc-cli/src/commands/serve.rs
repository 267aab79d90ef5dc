//! Serve command implementation.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use perc_api::{create_app_state, create_router};
use perc_explain::Explainer;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ServeConfig;

/// Execute the serve command.
pub async fn execute(host: IpAddr, port: u16, origin: Option<&str>) -> Result<()> {
    let config = ServeConfig::resolve(host, port, origin)?;

    // One client for the whole process, shared by every request
    let explainer =
        Explainer::from_config(&config.llm).context("Failed to build explanation client")?;
    let state = create_app_state(explainer);
    let app = create_router(state, config.allowed_origin.clone());

    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.addr))?;

    info!(addr = %config.addr, model = %config.llm.model, "PerC API listening");

    println!("{}", banner(config.addr, &config.allowed_origin));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn banner(addr: SocketAddr, origin: &HeaderValue) -> String {
    [
        String::new(),
        "🚀 PerC AI Server".to_string(),
        format!("   URL:    http://{addr}"),
        format!("   Solve:  POST http://{addr}/solve"),
        format!("   Origin: {}", origin.to_str().unwrap_or("<binary>")),
        String::new(),
        "   Press Ctrl+C to stop".to_string(),
    ]
    .join("\n")
        + "\n"
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
