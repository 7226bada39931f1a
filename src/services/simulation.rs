//! Simulation orchestration: runs the signal core on the blocking pool and
//! hands the finished batch to the persistence sink.

use crate::{
    db::DbPool,
    entities::sensor_records,
    errors::ServiceError,
    signal::{
        synth::{DEFAULT_OSCILLATION_THRESHOLD, DEFAULT_SEED},
        synthesize_consumption, synthesize_power_factor, synthesize_voltage_with_oscillations,
        OscillationEvent, SensorReading,
    },
};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{EntityTrait, Set, TransactionTrait};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// SQLite caps bind parameters per statement; 500 rows of 9 columns stays
/// comfortably under the limit on every supported backend.
const INSERT_CHUNK_SIZE: usize = 500;

/// Persistence boundary for generated batches.
///
/// The core never retries: a failed batch propagates unchanged and nothing
/// is partially resubmitted. Retry policy belongs to the caller.
#[async_trait]
pub trait ReadingSink: Send + Sync {
    async fn persist_batch(&self, readings: Vec<SensorReading>) -> Result<u64, ServiceError>;
}

/// Database-backed sink. Owns the mapping from the plain `SensorReading`
/// value object to the `sensor_records` entity.
pub struct DbReadingSink {
    db_pool: Arc<DbPool>,
}

impl DbReadingSink {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ReadingSink for DbReadingSink {
    async fn persist_batch(&self, readings: Vec<SensorReading>) -> Result<u64, ServiceError> {
        let total = readings.len() as u64;
        let txn = self.db_pool.begin().await?;

        for chunk in readings.chunks(INSERT_CHUNK_SIZE) {
            let models = chunk.iter().map(|reading| sensor_records::ActiveModel {
                id: Set(Uuid::new_v4()),
                sensor_model: Set(reading.sensor_model.clone()),
                measure_unit: Set(reading.measure_unit.clone()),
                device: Set(reading.device.clone()),
                location: Set(reading.location.clone()),
                data_type: Set(reading.data_type.clone()),
                data: Set(reading.value),
                created_at: Set(reading.timestamp),
                updated_at: Set(None),
            });
            sensor_records::Entity::insert_many(models).exec(&txn).await?;
        }

        txn.commit().await?;
        info!("Persisted batch of {} readings", total);
        Ok(total)
    }
}

/// Result of a persisted simulation run.
#[derive(Debug)]
pub struct SimulationOutcome {
    pub inserted: u64,
    pub seed: u64,
}

/// Result of the voltage variant, including the detected oscillations.
#[derive(Debug)]
pub struct VoltageOutcome {
    pub inserted: u64,
    pub seed: u64,
    pub threshold: f64,
    pub events: Vec<OscillationEvent>,
}

/// Service driving the three synthesizers.
#[derive(Clone)]
pub struct SimulationService {
    sink: Arc<dyn ReadingSink>,
    max_days: u32,
    max_minutes: u32,
}

impl SimulationService {
    pub fn new(sink: Arc<dyn ReadingSink>, max_days: u32, max_minutes: u32) -> Self {
        Self {
            sink,
            max_days,
            max_minutes,
        }
    }

    fn check_bound(value: u32, max: u32, name: &str) -> Result<(), ServiceError> {
        if value > max {
            return Err(ServiceError::InvalidInput(format!(
                "`{}` must not exceed {}, got {}",
                name, max, value
            )));
        }
        Ok(())
    }

    /// Generates and persists a power-factor batch.
    #[instrument(skip(self))]
    pub async fn run_power_factor(
        &self,
        days: u32,
        seed: Option<u64>,
    ) -> Result<SimulationOutcome, ServiceError> {
        Self::check_bound(days, self.max_days, "days")?;
        let seed = seed.unwrap_or(DEFAULT_SEED);
        let start = Utc::now();

        // Generation is CPU-bound; keep it off the request-handling runtime.
        let readings =
            tokio::task::spawn_blocking(move || synthesize_power_factor(days, seed, start))
                .await
                .map_err(|e| {
                    ServiceError::InternalError(format!("generation task failed: {}", e))
                })??;

        let inserted = self.sink.persist_batch(readings).await?;
        Ok(SimulationOutcome { inserted, seed })
    }

    /// Generates and persists an energy-consumption batch.
    #[instrument(skip(self))]
    pub async fn run_consumption(
        &self,
        days: u32,
        seed: Option<u64>,
    ) -> Result<SimulationOutcome, ServiceError> {
        Self::check_bound(days, self.max_days, "days")?;
        let seed = seed.unwrap_or(DEFAULT_SEED);
        let start = Utc::now();

        let readings =
            tokio::task::spawn_blocking(move || synthesize_consumption(days, seed, start))
                .await
                .map_err(|e| {
                    ServiceError::InternalError(format!("generation task failed: {}", e))
                })??;

        let inserted = self.sink.persist_batch(readings).await?;
        Ok(SimulationOutcome { inserted, seed })
    }

    /// Generates and persists a voltage batch, reporting the oscillations
    /// detected before assembly.
    #[instrument(skip(self))]
    pub async fn run_voltage(
        &self,
        minutes: u32,
        threshold: Option<f64>,
        seed: Option<u64>,
    ) -> Result<VoltageOutcome, ServiceError> {
        Self::check_bound(minutes, self.max_minutes, "minutes")?;
        let seed = seed.unwrap_or(DEFAULT_SEED);
        let threshold = threshold.unwrap_or(DEFAULT_OSCILLATION_THRESHOLD);
        let start = Utc::now();

        let synthesis = tokio::task::spawn_blocking(move || {
            synthesize_voltage_with_oscillations(minutes, threshold, seed, start)
        })
        .await
        .map_err(|e| ServiceError::InternalError(format!("generation task failed: {}", e)))??;

        let inserted = self.sink.persist_batch(synthesis.readings).await?;
        info!(
            "Voltage simulation flagged {} oscillations",
            synthesis.events.len()
        );

        Ok(VoltageOutcome {
            inserted,
            seed,
            threshold,
            events: synthesis.events,
        })
    }
}
