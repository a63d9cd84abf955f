use sqlx::PgPool;
use uuid::Uuid;

use crate::collections::TableSpec;
use crate::models::{Payload, Record};

pub async fn create_table(pool: &PgPool, table: &TableSpec) -> Result<(), sqlx::Error> {
    let sql = table.create_statement();
    sqlx::query(&sql).execute(pool).await?;
    Ok(())
}

pub async fn insert(
    pool: &PgPool,
    table: &TableSpec,
    id: Uuid,
    payload: &Payload,
) -> Result<Uuid, sqlx::Error> {
    let sql = table.insert_statement();
    sqlx::query_scalar::<_, Uuid>(&sql)
        .bind(id)
        .bind(payload.as_str())
        .fetch_one(pool)
        .await
}

pub async fn find_by_id(
    pool: &PgPool,
    table: &TableSpec,
    id: Uuid,
) -> Result<Option<Record>, sqlx::Error> {
    let sql = table.select_statement();
    sqlx::query_as::<_, Record>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Check out one pooled connection and hand it straight back.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    let conn = pool.acquire().await?;
    drop(conn);
    Ok(())
}
