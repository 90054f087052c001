use crate::di::UseCases;
use netblocks_api::{create_app, AppState};
use netblocks_domain::Config;
use tracing::info;

pub async fn start_web_server(config: &Config, use_cases: UseCases) -> anyhow::Result<()> {
    let addr = config.server.socket_addr()?;

    let app = create_app(AppState {
        get_ip_ranges: use_cases.get_ip_ranges,
    });

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Netblocks API: http://{}/api/netblock-ip-ranges", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Netblocks API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
