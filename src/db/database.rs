use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

use crate::config::DatabaseConfig;

/// Persistence gateway. Cheap to clone; the connection pool is shared.
#[derive(Clone)]
pub struct DatabaseService {
    pub(crate) db: DatabaseConnection,
}

impl DatabaseService {
    /// Connects and brings the schema up to date.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        info!(driver = ?config.driver, name = %config.name, "Connecting to database...");
        let mut options = ConnectOptions::new(config.url());
        options
            .max_connections(config.max_connections)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        let db = Database::connect(options).await?;
        info!("Running migrations...");
        Migrator::up(&db, None).await?;
        info!("Connected to database.");
        Ok(Self { db })
    }
}
