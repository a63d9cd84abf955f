use crate::collections::TableSpec;
use crate::error::StartupError;
use crate::store::RecordStore;

/// Create every table the deployment needs. Statements are
/// `CREATE TABLE IF NOT EXISTS`, so running this again is a no-op.
/// The first failure aborts; nothing is retried.
pub async fn initialize(store: &dyn RecordStore, tables: &[TableSpec]) -> Result<(), StartupError> {
    for table in tables {
        if let Err(source) = store.ensure_table(table).await {
            tracing::error!("Error initializing table {}: {source}", table.name);
            return Err(StartupError::Schema {
                table: table.name.to_string(),
                source,
            });
        }
        tracing::info!("Created {} table if it didn't exist", table.name);
    }

    tracing::info!("All database tables initialized successfully");
    Ok(())
}

/// Startup connectivity check.
pub async fn check_connection(store: &dyn RecordStore) -> Result<(), StartupError> {
    match store.ping().await {
        Ok(()) => {
            tracing::info!("Successfully connected to PostgreSQL database");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Error connecting to PostgreSQL database: {e}");
            Err(StartupError::Connect(e))
        }
    }
}
