//! PostgreSQL Repository Implementation

use kernel::id::KvEntryId;
use sqlx::PgPool;

use crate::domain::entity::KvEntry;
use crate::domain::repository::KvRepository;
use crate::error::KvResult;

/// PostgreSQL-backed settings table
#[derive(Clone)]
pub struct PgKvRepository {
    pool: PgPool,
}

impl PgKvRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl KvRepository for PgKvRepository {
    async fn upsert(&self, key: &str, value: &str) -> KvResult<KvEntry> {
        let row = sqlx::query_as::<_, KvRow>(
            r#"
            INSERT INTO kvstore (key, value)
            VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value
            RETURNING id, key, value
            "#,
        )
        .bind(key)
        .bind(value)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_value(&self, key: &str) -> KvResult<Option<String>> {
        let value = sqlx::query_scalar::<_, String>(
            r#"
            SELECT value
            FROM kvstore
            WHERE key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(value)
    }
}

#[derive(sqlx::FromRow)]
struct KvRow {
    id: i32,
    key: String,
    value: String,
}

impl From<KvRow> for KvEntry {
    fn from(row: KvRow) -> Self {
        KvEntry {
            id: KvEntryId::from_i32(row.id),
            key: row.key,
            value: row.value,
        }
    }
}
