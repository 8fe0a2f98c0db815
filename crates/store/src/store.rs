use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use crate::StoreError;

/// Tables are created on first run and never migrated; `age` and `area` are
/// deliberately TEXT (the API treats them as opaque strings).
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS animals (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    common_name    TEXT NOT NULL,
    species        TEXT NOT NULL,
    age            TEXT NOT NULL,
    feeding_record TEXT,
    vet            TEXT
);

CREATE TABLE IF NOT EXISTS enclosures (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    name  TEXT NOT NULL,
    area  TEXT NOT NULL,
    clean TEXT
);

CREATE TABLE IF NOT EXISTS employees (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    name    TEXT NOT NULL,
    address TEXT NOT NULL
);
"#;

/// Handle to the zoo database.
///
/// Cloning is cheap (the pool is reference-counted); the handle is passed
/// into the service layer explicitly rather than living in process-global
/// state, so each test can run against its own store.
#[derive(Debug, Clone)]
pub struct ZooStore {
    pool: SqlitePool,
}

impl ZooStore {
    /// Connect to the database at `url`, creating the schema if missing.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new().connect(url).await?;
        Self::from_pool(pool).await
    }

    /// Fresh in-memory store. Each call yields an independent database.
    pub async fn in_memory() -> Result<Self, StoreError> {
        // A second connection would open a second empty database, so the
        // pool is pinned to one connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        Self::from_pool(pool).await
    }

    async fn from_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::raw_sql(SCHEMA).execute(&pool).await?;
        tracing::debug!("zoo schema ready");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
