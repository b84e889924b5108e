use std::path::Path;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::{
    rusqlite::{params, OptionalExtension},
    SqliteConnectionManager,
};

use super::MetadataStore;
use crate::content::ItemId;

/// Metadata table in the layout CMS hosts usually have: one row per item
/// and key.
#[derive(Debug)]
pub struct SqliteStore {
    pub pool: Pool<SqliteConnectionManager>,
}

impl SqliteStore {
    #[tracing::instrument]
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let manager = SqliteConnectionManager::file(path);
        let pool = r2d2::Pool::new(manager)?;

        prepare(pool.get()?)?;
        tracing::trace!("Opened metadata database `{}`.", path.display());

        Ok(Self { pool })
    }

    /// Every in-memory connection is its own database, so the pool keeps a
    /// single one.
    #[tracing::instrument]
    pub fn open_in_memory() -> anyhow::Result<Self> {
        let manager = SqliteConnectionManager::memory();
        let pool = r2d2::Pool::builder().max_size(1).build(manager)?;

        prepare(pool.get()?)?;
        Ok(Self { pool })
    }
}

fn prepare(connection: PooledConnection<SqliteConnectionManager>) -> anyhow::Result<()> {
    connection.execute(
        r#"
        CREATE TABLE IF NOT EXISTS post_meta (
            post_id INTEGER NOT NULL,
            meta_key TEXT NOT NULL,
            meta_value REAL NOT NULL,
            PRIMARY KEY (post_id, meta_key)
        )"#,
        params![],
    )?;

    Ok(())
}

impl MetadataStore for SqliteStore {
    fn get(&self, item_id: ItemId, key: &str) -> anyhow::Result<Option<f64>> {
        let value = self
            .pool
            .get()?
            .query_row(
                "SELECT meta_value FROM post_meta WHERE post_id = ? AND meta_key = ?",
                params![item_id, key],
                |row| row.get(0),
            )
            .optional()?;

        Ok(value)
    }

    fn set(&self, item_id: ItemId, key: &str, value: f64) -> anyhow::Result<()> {
        self.pool.get()?.execute(
            r#"
            INSERT INTO post_meta (post_id, meta_key, meta_value) VALUES (?, ?, ?)
            ON CONFLICT (post_id, meta_key) DO UPDATE SET meta_value = excluded.meta_value"#,
            params![item_id, key, value],
        )?;

        Ok(())
    }
}
