//! Dashboard data loading.
//!
//! The dashboard never fails: if the store cannot be queried the page is rendered as
//! if no sensors existed, and the failure is only logged.

use crate::core::reading::{SensorSeries, distinct_sensor_ids, sensor_series};
use crate::errors::Result;
use sea_orm::DatabaseConnection;
use tracing::{instrument, warn};

/// Everything the dashboard page needs from the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    /// Every sensor id with readings, ascending
    pub sensor_ids: Vec<i32>,
    /// Latest readings of the first sensor, if any sensor exists
    pub initial: Option<SensorSeries>,
}

/// Queries the sensor list and the initial series of the first sensor.
#[instrument(skip(db))]
pub async fn try_load_dashboard(db: &DatabaseConnection) -> Result<DashboardData> {
    let sensor_ids = distinct_sensor_ids(db).await?;

    let initial = match sensor_ids.first() {
        Some(&first) => Some(sensor_series(db, first).await?),
        None => None,
    };

    Ok(DashboardData {
        sensor_ids,
        initial,
    })
}

/// Like [`try_load_dashboard`], but a store failure yields empty data.
pub async fn load_dashboard(db: &DatabaseConnection) -> DashboardData {
    try_load_dashboard(db).await.unwrap_or_else(|e| {
        warn!("Failed to load dashboard data, rendering without sensors: {}", e);
        DashboardData::default()
    })
}
