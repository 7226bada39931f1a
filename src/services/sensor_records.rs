use crate::{db::DbPool, entities::sensor_records, errors::ServiceError};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// Fields for a new sensor record.
#[derive(Debug, Clone)]
pub struct NewSensorRecord {
    pub sensor_model: String,
    pub measure_unit: String,
    pub device: String,
    pub location: String,
    pub data_type: String,
    pub data: f64,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct SensorRecordPatch {
    pub sensor_model: Option<String>,
    pub measure_unit: Option<String>,
    pub device: Option<String>,
    pub location: Option<String>,
    pub data_type: Option<String>,
    pub data: Option<f64>,
}

/// Service for managing persisted sensor records
#[derive(Clone)]
pub struct SensorRecordService {
    db_pool: Arc<DbPool>,
}

impl SensorRecordService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Creates a single sensor record
    #[instrument(skip(self, record))]
    pub async fn create_record(
        &self,
        record: NewSensorRecord,
    ) -> Result<sensor_records::Model, ServiceError> {
        let db = &*self.db_pool;
        let model = sensor_records::ActiveModel {
            id: Set(Uuid::new_v4()),
            sensor_model: Set(record.sensor_model),
            measure_unit: Set(record.measure_unit),
            device: Set(record.device),
            location: Set(record.location),
            data_type: Set(record.data_type),
            data: Set(record.data),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };

        let inserted = model.insert(db).await?;
        info!("Sensor record created: {}", inserted.id);
        Ok(inserted)
    }

    /// Gets a sensor record by ID
    #[instrument(skip(self))]
    pub async fn get_record(
        &self,
        record_id: &Uuid,
    ) -> Result<Option<sensor_records::Model>, ServiceError> {
        let db = &*self.db_pool;
        let record = sensor_records::Entity::find_by_id(*record_id).one(db).await?;

        Ok(record)
    }

    /// Lists sensor records, newest first, optionally filtered by a
    /// sensor-model substring
    #[instrument(skip(self))]
    pub async fn list_records(
        &self,
        sensor_model: Option<&str>,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<sensor_records::Model>, u64), ServiceError> {
        let db = &*self.db_pool;

        let mut query = sensor_records::Entity::find();
        if let Some(filter) = sensor_model.filter(|s| !s.is_empty()) {
            query = query.filter(sensor_records::Column::SensorModel.contains(filter));
        }

        let total = query.clone().count(db).await?;
        let records = query
            .order_by_desc(sensor_records::Column::CreatedAt)
            .limit(Some(limit))
            .offset(offset)
            .all(db)
            .await?;

        Ok((records, total))
    }

    /// Applies a partial update and bumps `updated_at`
    #[instrument(skip(self, patch))]
    pub async fn update_record(
        &self,
        record_id: &Uuid,
        patch: SensorRecordPatch,
    ) -> Result<sensor_records::Model, ServiceError> {
        let db = &*self.db_pool;
        let record = sensor_records::Entity::find_by_id(*record_id)
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Sensor record with ID {} not found", record_id))
            })?;

        let mut active: sensor_records::ActiveModel = record.into();
        if let Some(sensor_model) = patch.sensor_model {
            active.sensor_model = Set(sensor_model);
        }
        if let Some(measure_unit) = patch.measure_unit {
            active.measure_unit = Set(measure_unit);
        }
        if let Some(device) = patch.device {
            active.device = Set(device);
        }
        if let Some(location) = patch.location {
            active.location = Set(location);
        }
        if let Some(data_type) = patch.data_type {
            active.data_type = Set(data_type);
        }
        if let Some(data) = patch.data {
            active.data = Set(data);
        }
        active.updated_at = Set(Some(Utc::now()));

        let updated = active.update(db).await?;
        info!("Sensor record updated: {}", updated.id);
        Ok(updated)
    }

    /// Deletes a sensor record
    #[instrument(skip(self))]
    pub async fn delete_record(&self, record_id: &Uuid) -> Result<(), ServiceError> {
        let db = &*self.db_pool;
        let result = sensor_records::Entity::delete_by_id(*record_id)
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!(
                "Sensor record with ID {} not found",
                record_id
            )));
        }

        info!("Sensor record deleted: {}", record_id);
        Ok(())
    }
}
