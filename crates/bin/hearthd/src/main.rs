//! # hearthd: heating simulation daemon
//!
//! Composition root that wires the house together and runs the clock.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise `tracing` from the configured filter
//! - Load the house layout (JSON document or the demo house)
//! - Build the house with the standard listener wiring and configured zones
//! - Start the simulation clock and a periodic room report
//! - Stop the clock on ctrl-c
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use std::sync::Arc;
use std::time::Duration;

use hearth_adapter_layout_memory::InMemoryHouseLayout;
use hearth_app::clock::SimulationClock;
use hearth_app::house::{House, SharedHouse, lock};
use hearth_app::ports::HouseLayout;
use hearth_app::services::system_parameters::SystemParameters;
use hearth_domain::time::local_now;
use tokio::time::MissedTickBehavior;
use tracing_subscriber::EnvFilter;

use config::{Config, ConfigError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let layout = match &config.layout.path {
        Some(path) => InMemoryHouseLayout::from_path(path)?,
        None => {
            tracing::info!("no layout file configured, using the demo house");
            InMemoryHouseLayout::demo()
        }
    };
    let house = build_house(&config, layout)?.into_shared();

    let step = config
        .time_step()
        .ok_or_else(|| ConfigError::Validation("time step out of range".to_string()))?;
    let mut clock = SimulationClock::new(Arc::clone(&house), step);
    clock.start(config.tick_interval());
    let reporter = tokio::spawn(report(Arc::clone(&house), config.report_interval()));

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutdown requested");
    clock.stop();
    reporter.abort();
    log_rooms(&lock(&house));
    Ok(())
}

/// Wire a house with the standard listeners and the configured zones.
fn build_house(
    config: &Config,
    layout: InMemoryHouseLayout,
) -> Result<House<InMemoryHouseLayout>, Box<dyn std::error::Error>> {
    let start = config.simulation.start.unwrap_or_else(local_now);
    let parameters = SystemParameters::new(
        start,
        config.parameters.outside_temperature,
        config.season_dates(),
    );
    tracing::info!(
        %start,
        season = %parameters.season(),
        outside_temperature = parameters.outside_temperature(),
        "system parameters ready"
    );

    let mut house = House::new(layout, parameters)
        .with_default_listeners()
        .with_away_temperatures(config.away_temperatures());
    if config.heating.initialize_rooms {
        house.initialize_room_temperatures();
    }

    for zone in &config.heating.zones {
        let id = house.add_zone(&zone.name, &zone.room_keys()?)?.id;
        for (period, target) in zone.targets() {
            house.set_zone_period_target_temperature(id, period, target)?;
        }
    }
    Ok(house)
}

async fn report(house: SharedHouse<InMemoryHouseLayout>, every: Duration) {
    let mut ticker = tokio::time::interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        log_rooms(&lock(&house));
    }
}

fn log_rooms(house: &House<InMemoryHouseLayout>) {
    let heating = house.heating();
    tracing::info!(
        time = %house.clock_time(),
        season = %heating.season(),
        mode = ?heating.heating_mode(),
        outside_temperature = heating.outside_temperature(),
        "house report"
    );
    for room in house.layout().rooms() {
        let zone = heating
            .zone_of(room.key)
            .map_or("-", |zone| zone.name.as_str());
        tracing::info!(
            room = %room.key,
            name = %room.name,
            zone,
            temperature = room.temperature,
            hvac = room.hvac,
            mode = %room.heating_mode,
            "room"
        );
    }
}
