// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use anchor_node::config::NodeConfig;
use anchor_node::server::{build_router, AppState};
use anchor_node::telemetry::init_telemetry;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_telemetry();

    let cfg = NodeConfig::from_env()?;
    tracing::info!("Initializing anchor node with config: {:?}", cfg);

    if cfg.strict_encoding {
        tracing::info!("Strict encoding enabled: encode failures abort the request");
    } else {
        tracing::warn!("Strict encoding disabled: encode failures still broadcast empty tx bytes");
    }

    let addr = cfg.bind_addr;
    let app = build_router(AppState::new(cfg));

    tracing::info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
