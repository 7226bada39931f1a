//! GridSense API Library
//!
//! Sensor telemetry backend: CRUD over persisted sensor records plus
//! reproducible synthetic signal generation with oscillation detection.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod migrator;
pub mod openapi;
pub mod services;
pub mod signal;

use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub sensor_records: services::SensorRecordService,
    pub simulations: services::SimulationService,
}

impl AppState {
    /// Wires up services around an established pool.
    pub fn new(db: Arc<DatabaseConnection>, config: config::AppConfig) -> Self {
        let sensor_records = services::SensorRecordService::new(db.clone());
        let sink = Arc::new(services::DbReadingSink::new(db.clone()));
        let simulations = services::SimulationService::new(
            sink,
            config.simulation_max_days,
            config.simulation_max_minutes,
        );

        Self {
            db,
            config,
            sensor_records,
            simulations,
        }
    }
}

/// Builds the `/api/v1` route tree.
pub fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .nest("/sensors", handlers::sensor_record_routes())
        .nest("/simulations", handlers::simulation_routes())
}
