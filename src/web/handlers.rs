//! Route handlers.
//!
//! Handlers translate HTTP input into calls to [`crate::core`] and shape the results.
//! Errors are returned as [`crate::errors::Error`] and rendered by its `IntoResponse`.

use crate::{
    core::{
        dashboard::load_dashboard,
        reading::{
            SensorSeries, TIMESTAMP_FORMAT, any_reading, parse_value, record_reading,
            sensor_series, validate_sensor_id,
        },
    },
    errors::Result,
    web::{
        AppState,
        extract::{ValidPath, ValidQuery},
        views::{DashboardTemplate, PageTemplate, render},
    },
};
use axum::{Json, extract::State, http::StatusCode, response::Html};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Query parameters of the write endpoint. `value` stays raw so that missing and
/// malformed input are reported through the unified error type.
#[derive(Debug, Default, Deserialize)]
pub struct InsertParams {
    /// Measurement to store
    pub value: Option<String>,
}

/// Confirmation returned after a reading is stored.
#[derive(Debug, Serialize)]
pub struct InsertedReading {
    /// Confirmation text
    pub message: &'static str,
    /// Sensor the reading was stored for
    pub sensor_id: i32,
    /// Stored value
    pub value: f64,
}

/// `GET /`
pub async fn home() -> &'static str {
    "Hello, World!"
}

/// `GET /about`
pub async fn about() -> &'static str {
    "About"
}

/// `GET /sensor` - describes one arbitrary stored reading.
pub async fn sample_reading(State(state): State<AppState>) -> Result<String> {
    let text = match any_reading(&state.database).await? {
        Some(reading) => format!(
            "Current reading: sensor {} = {} at {}",
            reading.sensor_id,
            reading.value,
            reading.created_at.format(TIMESTAMP_FORMAT)
        ),
        None => "No readings stored.".to_string(),
    };
    Ok(text)
}

/// `GET /pagina`
pub async fn pagina(State(state): State<AppState>) -> Result<Html<String>> {
    render(&PageTemplate {
        user: state.config.page_user.clone(),
    })
}

/// `GET /dashboard` - always renders, even when the store is unreachable.
pub async fn dashboard(State(state): State<AppState>) -> Result<Html<String>> {
    let data = load_dashboard(&state.database).await;
    render(&DashboardTemplate::new(&data)?)
}

/// `GET /sensor/{sensor_id}` - latest readings, oldest first.
pub async fn read_sensor(
    State(state): State<AppState>,
    ValidPath(sensor_id): ValidPath<i32>,
) -> Result<Json<SensorSeries>> {
    let sensor_id = validate_sensor_id(sensor_id)?;
    let series = sensor_series(&state.database, sensor_id).await?;
    Ok(Json(series))
}

/// `POST /sensor/{sensor_id}?value=` - stores one reading.
pub async fn insert_reading(
    State(state): State<AppState>,
    ValidPath(sensor_id): ValidPath<i32>,
    ValidQuery(params): ValidQuery<InsertParams>,
) -> Result<(StatusCode, Json<InsertedReading>)> {
    let sensor_id = validate_sensor_id(sensor_id)?;
    let value = parse_value(params.value.as_deref())?;
    record_reading(&state.database, sensor_id, value).await?;
    info!(sensor_id, value, "Sensor value inserted");

    Ok((
        StatusCode::CREATED,
        Json(InsertedReading {
            message: "Sensor value inserted successfully",
            sensor_id,
            value,
        }),
    ))
}
