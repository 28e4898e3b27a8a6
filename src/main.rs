// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::demo_data::DemoDataService;
use crate::application::fleet_generator::{FleetGenerator, SyntheticFleetGenerator};
use crate::application::fleet_service::FleetService;
use crate::infrastructure::config::load_app_config;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_app_config()?;

    // Populate the ledger once; it lives as long as the process
    let mut generator = SyntheticFleetGenerator::from_seed(
        config.fleet.seed,
        config.assets.placeholder_image.clone(),
    );
    let ledger = generator.generate(config.fleet.sprinters, config.fleet.party_buses);
    if ledger.is_empty() {
        tracing::warn!("Fleet is configured with no vehicles; bookings and feedback will be empty");
    }
    tracing::info!(
        "Generated demo fleet of {} vehicles, total daily profit {:.2}",
        ledger.len(),
        ledger.total_daily_profit()
    );

    // Create services (application layer)
    let fleet_service = FleetService::new(ledger, config.assets.placeholder_image.clone());
    let demo_data = DemoDataService::new(config.fleet.seed);

    let state = Arc::new(AppState {
        fleet_service,
        demo_data,
        placeholder_image: config.assets.placeholder_image,
    });

    // Start server
    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address {:?}", config.server.bind))?;
    tracing::info!("Starting fleet-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router(state)).await?;

    Ok(())
}
