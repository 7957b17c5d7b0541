use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::{Record, RecordStore, Result};

/// PostgreSQL-backed record store.
///
/// Every collection lives in the single `records` table (see
/// `migrations/001_create_records_table.sql`), keyed by
/// `(collection, key)` with the body stored as JSONB.
#[derive(Clone)]
pub struct PostgresRecordStore {
    pool: PgPool,
}

impl PostgresRecordStore {
    /// Creates a new PostgreSQL record store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to the database at `url` with a default pool.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = PgPool::connect(url).await?;
        Ok(Self::new(pool))
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn row_to_record(row: PgRow) -> Result<Record> {
        Ok(Record {
            key: row.try_get("key")?,
            body: row.try_get("body")?,
        })
    }
}

#[async_trait]
impl RecordStore for PostgresRecordStore {
    #[tracing::instrument(skip(self, record), fields(key = %record.key))]
    async fn put(&self, collection: &str, record: Record) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO records (collection, key, body)
            VALUES ($1, $2, $3)
            ON CONFLICT (collection, key) DO UPDATE SET body = EXCLUDED.body
            "#,
        )
        .bind(collection)
        .bind(&record.key)
        .bind(&record.body)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn scan_all(&self, collection: &str) -> Result<Vec<Record>> {
        let rows = sqlx::query("SELECT key, body FROM records WHERE collection = $1 ORDER BY seq")
            .bind(collection)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Self::row_to_record).collect()
    }
}
