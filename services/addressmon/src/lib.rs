//! Addressmon - address monitor table
//!
//! Fetches the address dump of a network monitoring daemon together with a
//! list of known devices and renders a table of observed hardware addresses,
//! newest first, with their network addresses and descriptions.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod io;
pub mod loader;
pub mod render;
pub mod session;

pub use config::{load_config, Config};
pub use error::{AddressmonError, Result};

use std::net::SocketAddr;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::io::{HttpClient, ReqwestHttpClient};
use crate::loader::TableLoader;
use crate::session::{LoadState, Session};

/// Build the table loader described by the configuration
pub fn build_loader(config: &Config) -> Result<TableLoader> {
    config.validate()?;
    let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::with_timeout(
        config.source.request_timeout(),
    )?);
    Ok(TableLoader::new(
        config.source.clone(),
        config.table.clone(),
        http,
    ))
}

/// Load once and render a complete page.
///
/// Returns `None` when the load failed; the failure has already been logged.
pub async fn render_once(loader: &TableLoader) -> Option<String> {
    let mut session = Session::new();
    match session.refresh(loader).await {
        LoadState::Rendered => Some(render::render_page(session.table())),
        _ => None,
    }
}

/// Serve the dashboard until Ctrl-C
pub async fn run(config: Config) -> Result<()> {
    let loader = Arc::new(build_loader(&config)?);

    if !config.dashboard.enabled {
        tracing::warn!("Dashboard disabled, nothing to serve");
        return Ok(());
    }

    let cancel = CancellationToken::new();

    // Setup shutdown handler
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
        }
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    let router = dashboard::build_router(loader);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.dashboard.port));
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        AddressmonError::Dashboard(format!(
            "Failed to bind dashboard to port {}: {}",
            config.dashboard.port, e
        ))
    })?;
    tracing::info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await?;

    tracing::info!("Addressmon stopped");
    Ok(())
}
