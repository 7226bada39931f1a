use super::common::{success_response, validate_input};
use crate::{errors::ApiError, AppState};
use axum::{
    extract::{Json, State},
    response::IntoResponse,
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use validator::Validate;

/// Parameters for the minute-resolution synthesizers.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DayRangeRequest {
    /// Number of days to synthesize, one reading per minute
    #[validate(range(min = 1))]
    pub days: u32,
    /// Optional seed pinning the generated series
    pub seed: Option<u64>,
}

/// Parameters for the decisecond-resolution voltage synthesizer.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct VoltageRequest {
    /// Number of minutes to synthesize at 10 samples per second
    #[validate(range(min = 1))]
    pub minutes: u32,
    /// Oscillation threshold in volts (default 5.0)
    pub threshold: Option<f64>,
    /// Optional seed pinning the generated series
    pub seed: Option<u64>,
}

/// Generate and persist a power-factor batch
#[utoipa::path(
    post,
    path = "/api/v1/simulations/power-factor",
    request_body = DayRangeRequest,
    responses(
        (status = 200, description = "Batch generated and persisted"),
        (status = 400, description = "Invalid parameters", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "simulations"
)]
pub async fn simulate_power_factor(
    State(state): State<AppState>,
    Json(payload): Json<DayRangeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let outcome = state
        .simulations
        .run_power_factor(payload.days, payload.seed)
        .await?;

    Ok(success_response(json!({
        "data_type": "Power Factor",
        "inserted": outcome.inserted,
        "seed": outcome.seed,
    })))
}

/// Generate and persist an energy-consumption batch
#[utoipa::path(
    post,
    path = "/api/v1/simulations/consumption",
    request_body = DayRangeRequest,
    responses(
        (status = 200, description = "Batch generated and persisted"),
        (status = 400, description = "Invalid parameters", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "simulations"
)]
pub async fn simulate_consumption(
    State(state): State<AppState>,
    Json(payload): Json<DayRangeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let outcome = state
        .simulations
        .run_consumption(payload.days, payload.seed)
        .await?;

    Ok(success_response(json!({
        "data_type": "Energy Consumption",
        "inserted": outcome.inserted,
        "seed": outcome.seed,
    })))
}

/// Generate and persist a voltage batch, reporting detected oscillations
#[utoipa::path(
    post,
    path = "/api/v1/simulations/voltage",
    request_body = VoltageRequest,
    responses(
        (status = 200, description = "Batch generated and persisted"),
        (status = 400, description = "Invalid parameters", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "simulations"
)]
pub async fn simulate_voltage(
    State(state): State<AppState>,
    Json(payload): Json<VoltageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let outcome = state
        .simulations
        .run_voltage(payload.minutes, payload.threshold, payload.seed)
        .await?;

    Ok(success_response(json!({
        "data_type": "Voltage",
        "inserted": outcome.inserted,
        "seed": outcome.seed,
        "threshold": outcome.threshold,
        "oscillations": outcome.events.len(),
        "events": outcome.events,
    })))
}

/// Creates the router for simulation endpoints
pub fn simulation_routes() -> Router<AppState> {
    Router::new()
        .route("/power-factor", post(simulate_power_factor))
        .route("/consumption", post(simulate_consumption))
        .route("/voltage", post(simulate_voltage))
}
