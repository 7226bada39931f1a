use super::common::{
    created_response, no_content_response, success_response, validate_input, PaginationParams,
};
use crate::{
    errors::ApiError,
    services::sensor_records::{NewSensorRecord, SensorRecordPatch},
    AppState,
};
use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::{delete, get, patch, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Request DTOs

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSensorRecordRequest {
    #[validate(length(min = 1))]
    pub sensor_model: String,
    #[validate(length(min = 1))]
    pub measure_unit: String,
    #[validate(length(min = 1))]
    pub device: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(length(min = 1))]
    pub data_type: String,
    pub data: f64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateSensorRecordRequest {
    #[validate(length(min = 1))]
    pub sensor_model: Option<String>,
    #[validate(length(min = 1))]
    pub measure_unit: Option<String>,
    #[validate(length(min = 1))]
    pub device: Option<String>,
    #[validate(length(min = 1))]
    pub location: Option<String>,
    #[validate(length(min = 1))]
    pub data_type: Option<String>,
    pub data: Option<f64>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListFilters {
    /// Substring match on the sensor model
    pub sensor_model: Option<String>,
}

// Handler functions

/// Create a new sensor record
#[utoipa::path(
    post,
    path = "/api/v1/sensors",
    request_body = CreateSensorRecordRequest,
    responses(
        (status = 201, description = "Sensor record created"),
        (status = 400, description = "Invalid request", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "sensors"
)]
pub async fn create_sensor_record(
    State(state): State<AppState>,
    Json(payload): Json<CreateSensorRecordRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let record = state
        .sensor_records
        .create_record(NewSensorRecord {
            sensor_model: payload.sensor_model,
            measure_unit: payload.measure_unit,
            device: payload.device,
            location: payload.location,
            data_type: payload.data_type,
            data: payload.data,
        })
        .await?;

    Ok(created_response(json!({ "sensor_record": record })))
}

/// Get a sensor record by ID
#[utoipa::path(
    get,
    path = "/api/v1/sensors/{id}",
    params(("id" = Uuid, Path, description = "Sensor record id")),
    responses(
        (status = 200, description = "Sensor record returned"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "sensors"
)]
pub async fn get_sensor_record(
    State(state): State<AppState>,
    Path(record_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let record = state
        .sensor_records
        .get_record(&record_id)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("Sensor record with ID {} not found", record_id))
        })?;

    Ok(success_response(json!({ "sensor_record": record })))
}

/// List sensor records with optional model filter and pagination
#[utoipa::path(
    get,
    path = "/api/v1/sensors",
    params(ListFilters, PaginationParams),
    responses(
        (status = 200, description = "Sensor record list returned"),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "sensors"
)]
pub async fn list_sensor_records(
    State(state): State<AppState>,
    Query(filters): Query<ListFilters>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, ApiError> {
    let (records, total) = state
        .sensor_records
        .list_records(
            filters.sensor_model.as_deref(),
            pagination.per_page,
            pagination.offset(),
        )
        .await?;

    Ok(success_response(json!({
        "results": records.len(),
        "total": total,
        "records": records,
    })))
}

/// Partially update a sensor record
#[utoipa::path(
    patch,
    path = "/api/v1/sensors/{id}",
    params(("id" = Uuid, Path, description = "Sensor record id")),
    request_body = UpdateSensorRecordRequest,
    responses(
        (status = 200, description = "Sensor record updated"),
        (status = 400, description = "Invalid request", body = crate::errors::ErrorResponse),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "sensors"
)]
pub async fn update_sensor_record(
    State(state): State<AppState>,
    Path(record_id): Path<Uuid>,
    Json(payload): Json<UpdateSensorRecordRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let record = state
        .sensor_records
        .update_record(
            &record_id,
            SensorRecordPatch {
                sensor_model: payload.sensor_model,
                measure_unit: payload.measure_unit,
                device: payload.device,
                location: payload.location,
                data_type: payload.data_type,
                data: payload.data,
            },
        )
        .await?;

    Ok(success_response(json!({ "sensor_record": record })))
}

/// Delete a sensor record
#[utoipa::path(
    delete,
    path = "/api/v1/sensors/{id}",
    params(("id" = Uuid, Path, description = "Sensor record id")),
    responses(
        (status = 204, description = "Sensor record deleted"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "sensors"
)]
pub async fn delete_sensor_record(
    State(state): State<AppState>,
    Path(record_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .sensor_records
        .delete_record(&record_id)
        .await?;

    Ok(no_content_response())
}

/// Creates the router for sensor record endpoints
pub fn sensor_record_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_sensor_record))
        .route("/", get(list_sensor_records))
        .route("/:id", get(get_sensor_record))
        .route("/:id", patch(update_sensor_record))
        .route("/:id", delete(delete_sensor_record))
}
