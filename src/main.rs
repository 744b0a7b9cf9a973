use dotenvy::dotenv;
use sensor_dashboard::{config, errors::Result, web};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal since variables can be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Build the configuration once; it is immutable from here on
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Critical error loading application configuration: {}", e))?;

    // 4. Connect and make sure the readings table exists
    let db = config::database::create_connection(&app_config.database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    config::database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 5. Serve until shutdown, then close the pool once the router has released it
    let db = Arc::new(db);
    web::serve(app_config, Arc::clone(&db)).await?;

    match Arc::try_unwrap(db) {
        Ok(db) => {
            db.close().await?;
            info!("Database connection closed.");
        }
        Err(_) => warn!("Database connection still shared at shutdown, dropping it."),
    }
    Ok(())
}
