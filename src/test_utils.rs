//! Shared test utilities.
//!
//! Helpers for setting up in-memory databases and seeding readings with
//! predictable timestamps.

use crate::{entities::reading, errors::Result};
use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Timestamp of the first reading seeded by [`insert_series`]: 2024-01-01 10:00:00 UTC.
#[must_use]
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Inserts a reading with an explicit timestamp.
pub async fn create_reading_at(
    db: &DatabaseConnection,
    sensor_id: i32,
    value: f64,
    created_at: DateTime<Utc>,
) -> Result<reading::Model> {
    reading::ActiveModel {
        sensor_id: Set(sensor_id),
        value: Set(value),
        created_at: Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Inserts `values` for `sensor_id`, one second apart starting at [`base_time`].
pub async fn insert_series(db: &DatabaseConnection, sensor_id: i32, values: &[f64]) -> Result<()> {
    for (offset, &value) in (0_i64..).zip(values) {
        create_reading_at(db, sensor_id, value, base_time() + Duration::seconds(offset)).await?;
    }
    Ok(())
}
