use uuid::Uuid;

/// A stored row, read back with its columns aliased to `id` and `data`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Record {
    pub id: Uuid,
    pub data: serde_json::Value,
}
