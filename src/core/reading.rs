//! Reading business logic - Storing and querying sensor readings.
//!
//! Every function issues a single statement against the store. Series are read
//! newest-first with a limit and then reversed, so callers always receive readings
//! oldest-first.

use crate::{
    entities::{Reading, reading},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};
use serde::Serialize;
use tracing::{debug, instrument};

/// Maximum number of readings returned for one sensor.
pub const READING_LIMIT: u64 = 10;

/// Format used for every timestamp sent to clients.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Chronological series of readings for one sensor, as sent to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorSeries {
    /// Sensor the series belongs to
    pub sensor_id: i32,
    /// Values, oldest first
    pub values: Vec<f64>,
    /// Timestamps formatted with [`TIMESTAMP_FORMAT`], parallel to `values`
    pub timestamps: Vec<String>,
}

impl SensorSeries {
    /// Builds a series from readings that are already in chronological order.
    #[must_use]
    pub fn from_readings(sensor_id: i32, readings: &[reading::Model]) -> Self {
        Self {
            sensor_id,
            values: readings.iter().map(|r| r.value).collect(),
            timestamps: readings
                .iter()
                .map(|r| r.created_at.format(TIMESTAMP_FORMAT).to_string())
                .collect(),
        }
    }
}

/// Checks that a sensor id taken from a request path is positive.
pub fn validate_sensor_id(sensor_id: i32) -> Result<i32> {
    if sensor_id < 1 {
        return Err(Error::Validation {
            message: format!("Invalid sensor id {sensor_id}: must be a positive integer"),
        });
    }
    Ok(sensor_id)
}

/// Parses the raw `value` query parameter of a write request.
///
/// Rejects a missing parameter, text that is not a number, and non-finite numbers.
pub fn parse_value(raw: Option<&str>) -> Result<f64> {
    let raw = raw.ok_or_else(|| Error::Validation {
        message: "Missing 'value' query parameter".to_string(),
    })?;

    let value: f64 = raw.trim().parse().map_err(|_| Error::Validation {
        message: format!("Invalid 'value' query parameter: {raw:?} is not a number"),
    })?;

    if !value.is_finite() {
        return Err(Error::Validation {
            message: format!("Invalid 'value' query parameter: {raw:?} is not finite"),
        });
    }

    Ok(value)
}

/// Stores one reading for `sensor_id`, stamped with the current time.
#[instrument(skip(db))]
pub async fn record_reading(
    db: &DatabaseConnection,
    sensor_id: i32,
    value: f64,
) -> Result<reading::Model> {
    let model = reading::ActiveModel {
        sensor_id: Set(sensor_id),
        value: Set(value),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    let inserted = model.insert(db).await?;
    debug!(id = inserted.id, "Reading stored");
    Ok(inserted)
}

/// Retrieves the latest [`READING_LIMIT`] readings for a sensor, oldest first.
///
/// A sensor without readings yields an empty list rather than an error.
#[instrument(skip(db))]
pub async fn latest_readings(
    db: &DatabaseConnection,
    sensor_id: i32,
) -> Result<Vec<reading::Model>> {
    let mut readings = Reading::find()
        .filter(reading::Column::SensorId.eq(sensor_id))
        .order_by_desc(reading::Column::CreatedAt)
        .order_by_desc(reading::Column::Id)
        .limit(READING_LIMIT)
        .all(db)
        .await?;

    readings.reverse();
    Ok(readings)
}

/// Retrieves the latest readings for a sensor as a client-facing series.
pub async fn sensor_series(db: &DatabaseConnection, sensor_id: i32) -> Result<SensorSeries> {
    let readings = latest_readings(db, sensor_id).await?;
    Ok(SensorSeries::from_readings(sensor_id, &readings))
}

/// Lists every sensor id that has at least one reading, ascending.
#[instrument(skip(db))]
pub async fn distinct_sensor_ids(db: &DatabaseConnection) -> Result<Vec<i32>> {
    Reading::find()
        .select_only()
        .column(reading::Column::SensorId)
        .distinct()
        .order_by_asc(reading::Column::SensorId)
        .into_tuple::<i32>()
        .all(db)
        .await
        .map_err(Into::into)
}

/// Fetches one arbitrary reading, or `None` when the table is empty.
#[instrument(skip(db))]
pub async fn any_reading(db: &DatabaseConnection) -> Result<Option<reading::Model>> {
    Reading::find().one(db).await.map_err(Into::into)
}
