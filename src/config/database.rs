//! Database configuration module.
//!
//! Opens the connection pool for the configured store (PostgreSQL or `SQLite`) and makes
//! sure the readings table exists. The table definition is generated from the entity with
//! `Schema::create_table_from_entity`, so the schema always matches the Rust model.

use crate::entities::Reading;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{info, instrument};

/// Establishes a connection pool to the database at `database_url`.
#[instrument(skip(database_url))]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    let db = Database::connect(database_url).await?;
    info!(backend = ?db.get_database_backend(), "Database connection established");
    Ok(db)
}

/// Creates the readings table if it does not exist yet.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut reading_table = schema.create_table_from_entity(Reading);
    reading_table.if_not_exists();

    db.execute(builder.build(&reading_table)).await?;
    info!("Table `sensores` is ready");

    Ok(())
}
