//! Database connection wrapper.
//!
//! Schema management is an external concern; this wrapper only opens the
//! connection and hands out caller-owned handles for the stores.

use sea_orm::{Database as SeaDatabase, DatabaseConnection, DbErr};

use crate::config::StoreConfig;

/// Database wrapper for connection management
///
/// `Clone` is unavailable under the `mock` feature because sea-orm's
/// `DatabaseConnection` is only `Clone` when its `mock` feature is off.
#[cfg_attr(not(feature = "mock"), derive(Clone))]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open a connection using the configured database URL.
    pub async fn connect(config: &StoreConfig) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(&config.database_url).await?;
        tracing::info!("database connected");
        Ok(Self { connection })
    }

    /// Get a reference to the database connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Get a clone of the database connection.
    #[cfg(not(feature = "mock"))]
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}
