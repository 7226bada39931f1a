use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GridSense API",
        version = "0.1.0",
        description = r#"
# GridSense Sensor Telemetry API

Backend for persisted sensor telemetry with synthetic data generation.

## Features

- **Sensor Records**: CRUD over the persisted telemetry table with
  model filtering and pagination
- **Simulations**: reproducible synthetic batches for power factor,
  energy consumption and raw voltage, with oscillation detection on the
  voltage variant

## Error Handling

Failing endpoints return a consistent JSON body:

```json
{
  "error": "Bad Request",
  "message": "Validation failed",
  "timestamp": "2026-01-01T00:00:00Z"
}
```
"#
    ),
    paths(
        crate::handlers::sensor_records::create_sensor_record,
        crate::handlers::sensor_records::list_sensor_records,
        crate::handlers::sensor_records::get_sensor_record,
        crate::handlers::sensor_records::update_sensor_record,
        crate::handlers::sensor_records::delete_sensor_record,
        crate::handlers::simulations::simulate_power_factor,
        crate::handlers::simulations::simulate_consumption,
        crate::handlers::simulations::simulate_voltage,
    ),
    components(schemas(
        crate::entities::sensor_records::Model,
        crate::errors::ErrorResponse,
        crate::handlers::sensor_records::CreateSensorRecordRequest,
        crate::handlers::sensor_records::UpdateSensorRecordRequest,
        crate::handlers::simulations::DayRangeRequest,
        crate::handlers::simulations::VoltageRequest,
        crate::signal::oscillation::OscillationEvent,
    )),
    tags(
        (name = "sensors", description = "Sensor record management"),
        (name = "simulations", description = "Synthetic data generation")
    )
)]
pub struct ApiDoc;

/// Swagger UI router serving the generated document.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}
