//! Reading entity - One sensor measurement.
//!
//! Readings are append-only. Many readings share a `sensor_id`; they are ordered by
//! `created_at`, with `id` breaking ties between rows written in the same instant.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Reading database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sensores")]
pub struct Model {
    /// Surrogate key, never exposed over HTTP
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Sensor this reading belongs to (not unique)
    pub sensor_id: i32,
    /// Measured value
    pub value: f64,
    /// When the reading was stored
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeUtc,
}

/// `Reading` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
