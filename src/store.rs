use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::collections::TableSpec;
use crate::db;
use crate::models::{Payload, Record};

#[derive(Debug)]
pub enum StoreError {
    Database(sqlx::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Database(err) => write!(f, "Database Error: {err}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Database(err) => Some(err),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err)
    }
}

/// Persistence seam for records. Handlers only ever see this trait, so tests
/// can swap the database for something in memory.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Create the table if it does not exist yet. Must be idempotent.
    async fn ensure_table(&self, table: &TableSpec) -> Result<(), StoreError>;

    /// Insert one record and return the id the store recorded.
    async fn insert(
        &self,
        table: &TableSpec,
        id: Uuid,
        payload: &Payload,
    ) -> Result<Uuid, StoreError>;

    async fn find(&self, table: &TableSpec, id: Uuid) -> Result<Option<Record>, StoreError>;

    /// Acquire and release one connection.
    async fn ping(&self) -> Result<(), StoreError>;
}

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgStore {
    async fn ensure_table(&self, table: &TableSpec) -> Result<(), StoreError> {
        db::records::create_table(&self.pool, table).await?;
        Ok(())
    }

    async fn insert(
        &self,
        table: &TableSpec,
        id: Uuid,
        payload: &Payload,
    ) -> Result<Uuid, StoreError> {
        Ok(db::records::insert(&self.pool, table, id, payload).await?)
    }

    async fn find(&self, table: &TableSpec, id: Uuid) -> Result<Option<Record>, StoreError> {
        Ok(db::records::find_by_id(&self.pool, table, id).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        db::records::ping(&self.pool).await?;
        Ok(())
    }
}
