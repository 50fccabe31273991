use std::time::Instant;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::Config;
use crate::database;
use crate::services::UploadStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
    /// Directory holding uploaded project images
    pub uploads: UploadStore,
    /// Process start, reported as uptime
    pub started_at: Instant,
}

impl AppState {
    /// Connect to the database, create the schema and seed the bootstrap admin
    pub async fn new(config: Config) -> Result<Self, AppStateError> {
        let mut opt = ConnectOptions::new(&config.database_url);
        opt.max_connections(config.database_max_connections)
            .min_connections(1)
            .sqlx_logging(true);

        let db = Database::connect(opt)
            .await
            .map_err(|e| AppStateError::Database(e.to_string()))?;

        database::create_schema(&db)
            .await
            .map_err(|e| AppStateError::Schema(e.to_string()))?;

        database::seed_bootstrap_admin(&db, &config)
            .await
            .map_err(|e| AppStateError::Seed(e.to_string()))?;

        let uploads = UploadStore::new(config.upload_dir.clone());

        Ok(Self {
            db,
            config,
            uploads,
            started_at: Instant::now(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppStateError {
    #[error("Database connection error: {0}")]
    Database(String),

    #[error("Schema creation error: {0}")]
    Schema(String),

    #[error("Seed error: {0}")]
    Seed(String),
}
