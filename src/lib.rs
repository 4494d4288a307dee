pub(crate) mod api;
pub(crate) mod core;
pub(crate) mod models;
pub(crate) mod repositories;
pub(crate) mod schemas;

#[cfg(test)]
mod test_support;

use axum::{extract::Request, ServiceExt};

use crate::core::{config::Settings, state::AppState, telemetry};
use crate::repositories::items::ItemStore;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    telemetry::init_tracing(&settings)?;
    core::metrics::init(&settings)?;

    let items = if settings.store().seed { ItemStore::seeded() } else { ItemStore::new() };
    tracing::info!(item_count = items.len(), "Item store initialized");
    core::metrics::record_item_count(items.len());

    let state = AppState::new(settings, items);
    let app = api::router::app(state.clone());
    let listener = tokio::net::TcpListener::bind(state.settings().server_addr()).await?;

    tracing::info!(
        host = %state.settings().server_host(),
        port = state.settings().server_port(),
        environment = %state.settings().runtime().environment.as_str(),
        "Items API listening"
    );

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(core::shutdown::shutdown_signal())
        .await?;

    tracing::info!("Items API stopped");
    Ok(())
}
